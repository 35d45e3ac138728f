use crate::common::command::{run_bit_command, run_git_command};
use crate::common::redirect_temp_dir;
use predicates::prelude::predicate;

#[test]
fn fail_on_bare_repository() -> Result<(), Box<dyn std::error::Error>> {
    redirect_temp_dir();
    let dir = assert_fs::TempDir::new()?;
    run_git_command(dir.path(), &["init", "--quiet", "--bare"])
        .assert()
        .success();

    run_bit_command(dir.path(), &["-s"])
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("cannot report status on bare repository"));

    Ok(())
}
