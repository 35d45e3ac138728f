use crate::common::command::{repository_dir, run_bit_command};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
#[case(&["--verbose"])]
#[case(&["--ignore-submodules=dirty"])]
#[case(&["--untracked-files=maybe"])]
fn fail_on_unsupported_option(repository_dir: TempDir, #[case] args: &[&str]) {
    run_bit_command(repository_dir.path(), args)
        .assert()
        .code(2)
        .stdout("");
}
