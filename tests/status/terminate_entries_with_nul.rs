use crate::common::command::{init_repository_dir, run_bit_command};
use crate::common::file::{FileSpec, write_file};
use crate::common::stdout_of;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn terminate_entries_with_nul(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    write_file(FileSpec::new(
        init_repository_dir.path().join("1.txt"),
        "changed".to_string(),
    ));
    write_file(FileSpec::new(
        init_repository_dir.path().join("new.txt"),
        "new".to_string(),
    ));

    let actual_output = run_bit_command(init_repository_dir.path(), &["-z"])
        .assert()
        .success();

    assert_eq!(stdout_of(&actual_output)?, " M 1.txt\0?? new.txt\0");

    Ok(())
}
