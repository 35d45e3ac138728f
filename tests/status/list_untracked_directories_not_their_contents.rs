use crate::common::command::{init_repository_dir, run_bit_command};
use crate::common::file::{FileSpec, create_directory, write_file};
use crate::common::stdout_of;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn list_untracked_directories_not_their_contents(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let nested = init_repository_dir.path().join("outer/inner/file.txt");
    write_file(FileSpec::new(nested, "nested".to_string()));
    create_directory(&init_repository_dir.path().join("empty"));

    let actual_output = run_bit_command(init_repository_dir.path(), &["-s"])
        .assert()
        .success();
    assert_eq!(stdout_of(&actual_output)?, "?? outer/\n");

    let actual_output = run_bit_command(init_repository_dir.path(), &["-s", "-uall"])
        .assert()
        .success();
    assert_eq!(stdout_of(&actual_output)?, "?? outer/inner/file.txt\n");

    Ok(())
}
