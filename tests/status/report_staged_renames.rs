use crate::common::command::{init_repository_dir, run_bit_command, run_git_command};
use crate::common::stdout_of;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn report_staged_renames(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    run_git_command(init_repository_dir.path(), &["mv", "1.txt", "one.txt"])
        .assert()
        .success();

    let actual_output = run_bit_command(init_repository_dir.path(), &["-s"])
        .assert()
        .success();
    assert_eq!(stdout_of(&actual_output)?, "R  1.txt one.txt\n");

    let expected_output = "\
# On branch main
# Changes to be committed:
#   (use \"git reset HEAD <file>...\" to unstage)
#
#\trenamed:    1.txt -> one.txt
#
";
    let actual_output = run_bit_command(init_repository_dir.path(), &[])
        .assert()
        .success();
    assert_eq!(stdout_of(&actual_output)?, expected_output);

    Ok(())
}
