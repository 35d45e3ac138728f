use crate::common::command::{repository_dir, run_bit_command};
use crate::common::file::write_generated_files;
use crate::common::stdout_of;
use assert_fs::TempDir;
use fake::Fake;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn list_untracked_files_in_name_order(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let files_count = (2..=5).fake::<usize>();
    let files = write_generated_files(repository_dir.path(), files_count);

    let expected_output = files
        .iter()
        .map(|file| format!("?? {}\n", file.name()))
        .collect::<String>();
    let actual_output = run_bit_command(repository_dir.path(), &["--porcelain"])
        .assert()
        .success();

    assert_eq!(stdout_of(&actual_output)?, expected_output);

    Ok(())
}
