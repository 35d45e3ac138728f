use crate::common::file::{FileSpec, write_file};
use crate::common::redirect_temp_dir;
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

const AUTHOR_NAME: &str = "fake_user";
const AUTHOR_EMAIL: &str = "fake_email@email.com";

/// Keeps `git` and `bit-status` away from the developer's own configuration.
fn isolate(cmd: &mut Command, dir: &Path) {
    cmd.env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir)
        .env("GIT_CONFIG_NOSYSTEM", "1")
        .env("GIT_CONFIG_GLOBAL", "/dev/null")
        .env("GIT_AUTHOR_NAME", AUTHOR_NAME)
        .env("GIT_AUTHOR_EMAIL", AUTHOR_EMAIL)
        .env("GIT_COMMITTER_NAME", AUTHOR_NAME)
        .env("GIT_COMMITTER_EMAIL", AUTHOR_EMAIL)
        .env_remove("RUST_LOG");
}

#[fixture]
pub fn repository_dir() -> TempDir {
    redirect_temp_dir();
    let dir = TempDir::new().expect("Failed to create temp dir");

    run_git_command(dir.path(), &["init", "--quiet", "--initial-branch=main"])
        .assert()
        .success();

    dir
}

/// A repository with one commit holding `1.txt`, `a/2.txt` and `a/b/3.txt`.
#[fixture]
pub fn init_repository_dir(repository_dir: TempDir) -> TempDir {
    write_file(FileSpec::new(repository_dir.path().join("1.txt"), "one".to_string()));
    write_file(FileSpec::new(
        repository_dir.path().join("a").join("2.txt"),
        "two".to_string(),
    ));
    write_file(FileSpec::new(
        repository_dir.path().join("a").join("b").join("3.txt"),
        "three".to_string(),
    ));

    git_add(repository_dir.path(), &["."]).assert().success();
    git_commit(repository_dir.path(), "Initial commit")
        .assert()
        .success();

    repository_dir
}

pub fn run_bit_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("bit-status").expect("Failed to find bit-status binary");
    isolate(&mut cmd, dir);
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn run_git_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::new("git");
    isolate(&mut cmd, dir);
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn git_add(dir: &Path, paths: &[&str]) -> Command {
    let mut args = vec!["add", "--"];
    args.extend_from_slice(paths);
    run_git_command(dir, &args)
}

pub fn git_commit(dir: &Path, message: &str) -> Command {
    let mut cmd = run_git_command(dir, &["commit", "--quiet", "-m", message]);
    cmd.env("GIT_AUTHOR_DATE", "2023-01-01 12:00:00 +0000");
    cmd
}
