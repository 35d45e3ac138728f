use crate::common::command::{init_repository_dir, run_bit_command};
use crate::common::file::{FileSpec, write_file};
use crate::common::stdout_of;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn report_files_with_modified_contents(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    write_file(FileSpec::new(
        init_repository_dir.path().join("1.txt"),
        "changed".to_string(),
    ));
    write_file(FileSpec::new(
        init_repository_dir.path().join("a").join("2.txt"),
        "modified".to_string(),
    ));

    let actual_output = run_bit_command(init_repository_dir.path(), &["--porcelain"])
        .assert()
        .success();
    assert_eq!(stdout_of(&actual_output)?, " M 1.txt\n M a/2.txt\n");

    let expected_output = "\
# On branch main
# Changes not staged for commit:
#   (use \"git add <file>...\" to update what will be committed)
#   (use \"git checkout -- <file>...\" to discard changes in working directory)
#
#\tmodified:   1.txt
#\tmodified:   a/2.txt
#
no changes added to commit (use \"git add\" and/or \"git commit -a\")
";
    let actual_output = run_bit_command(init_repository_dir.path(), &[])
        .assert()
        .success();
    assert_eq!(stdout_of(&actual_output)?, expected_output);

    Ok(())
}
