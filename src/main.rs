use anyhow::Result;
use bit_status::areas::repository::Repository;
use bit_status::artifacts::status::options::{StatusArgs, StatusOptions};
use bit_status::commands::status::StatusCommand;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "bit-status",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Show the working tree status",
    long_about = "This command reports staged changes, unstaged changes, untracked and \
    ignored files of the repository in the current directory (or the one given with --git-dir), \
    either as the classic commented long report or as two-letter short codes.",
    args_override_self = true,
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(flatten)]
    args: StatusArgs,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let options = StatusOptions::try_from(cli.args)?;
    let repository = Repository::open(options.repository_path())?;
    tracing::debug!(repository = %repository.path().display(), "reporting status");

    let mut stdout = std::io::stdout().lock();
    StatusCommand::new(&repository, &options).run(&mut stdout)?;

    Ok(())
}
