use crate::common::command::{init_repository_dir, run_bit_command, run_git_command};
use crate::common::file::delete_path;
use crate::common::stdout_of;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn report_deleted_files_from_last_commit(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    delete_path(&init_repository_dir.path().join("1.txt"));
    run_git_command(init_repository_dir.path(), &["rm", "--quiet", "a/2.txt"])
        .assert()
        .success();

    let actual_output = run_bit_command(init_repository_dir.path(), &["-s"])
        .assert()
        .success();
    assert_eq!(stdout_of(&actual_output)?, " D 1.txt\nD  a/2.txt\n");

    let expected_output = "\
# On branch main
# Changes to be committed:
#   (use \"git reset HEAD <file>...\" to unstage)
#
#\tdeleted:    a/2.txt
#
# Changes not staged for commit:
#   (use \"git add/rm <file>...\" to update what will be committed)
#   (use \"git checkout -- <file>...\" to discard changes in working directory)
#
#\tdeleted:    1.txt
#
";
    let actual_output = run_bit_command(init_repository_dir.path(), &[])
        .assert()
        .success();
    assert_eq!(stdout_of(&actual_output)?, expected_output);

    Ok(())
}
