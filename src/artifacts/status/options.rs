//! Status query and output options
//!
//! [`StatusOptions`] is built once from the command line (see [`StatusArgs`])
//! and then only borrowed: the provider reads the query part, the renderers
//! read the output part.

use crate::errors::{StatusError, StatusResult};
use bitflags::bitflags;
use clap::{ArgAction, Args, ValueEnum};
use std::path::{Path, PathBuf};

pub const MAX_PATHSPECS: usize = 8;

bitflags! {
    /// Which entries the provider includes and how it orders them.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct QueryFlags: u32 {
        const INCLUDE_UNTRACKED = 0b0000_0001;
        const INCLUDE_IGNORED = 0b0000_0010;
        const RECURSE_UNTRACKED_DIRS = 0b0000_0100;
        const EXCLUDE_SUBMODULES = 0b0000_1000;
        const RENAMES_HEAD_TO_INDEX = 0b0001_0000;
        const SORT_CASE_SENSITIVELY = 0b0010_0000;
    }
}

impl Default for QueryFlags {
    fn default() -> Self {
        Self::INCLUDE_UNTRACKED | Self::RENAMES_HEAD_TO_INDEX | Self::SORT_CASE_SENSITIVELY
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Long,
    Short,
    /// Script-friendly; rendered exactly like [`OutputFormat::Short`].
    Porcelain,
}

impl OutputFormat {
    pub fn is_long(&self) -> bool {
        matches!(self, OutputFormat::Long)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum UntrackedFiles {
    No,
    Normal,
    All,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum IgnoreSubmodules {
    All,
}

#[derive(Debug, Clone, Default, Args)]
pub struct StatusArgs {
    #[arg(
        short,
        long,
        overrides_with_all = ["long", "porcelain"],
        help = "Give the output in the short format"
    )]
    pub short: bool,

    #[arg(
        long,
        overrides_with_all = ["short", "porcelain"],
        help = "Give the output in the long format (default)"
    )]
    pub long: bool,

    #[arg(
        long,
        overrides_with_all = ["short", "long"],
        help = "Give the output in a stable, script-friendly format"
    )]
    pub porcelain: bool,

    #[arg(short, long, help = "Show the branch line")]
    pub branch: bool,

    #[arg(
        short = 'z',
        help = "Terminate entries with NUL; implies --porcelain unless a format is given"
    )]
    pub null_terminate: bool,

    #[arg(long, help = "Show ignored files as well")]
    pub ignored: bool,

    #[arg(
        short = 'u',
        long = "untracked-files",
        value_enum,
        value_name = "MODE",
        action = ArgAction::Append,
        help = "Show untracked files (no, normal or all)"
    )]
    pub untracked_files: Vec<UntrackedFiles>,

    #[arg(
        long = "ignore-submodules",
        value_enum,
        value_name = "WHEN",
        help = "Ignore changes to submodules"
    )]
    pub ignore_submodules: Option<IgnoreSubmodules>,

    #[arg(long = "git-dir", value_name = "PATH", help = "Path to the repository")]
    pub git_dir: Option<PathBuf>,

    #[arg(value_name = "PATHSPEC", help = "Limit the output to the given paths")]
    pub paths: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusOptions {
    query: QueryFlags,
    pathspecs: Vec<String>,
    format: OutputFormat,
    show_branch: bool,
    null_terminate: bool,
    repository_path: PathBuf,
}

impl Default for StatusOptions {
    fn default() -> Self {
        Self {
            query: QueryFlags::default(),
            pathspecs: Vec::new(),
            format: OutputFormat::default(),
            show_branch: false,
            null_terminate: false,
            repository_path: PathBuf::from("."),
        }
    }
}

impl StatusOptions {
    pub fn query(&self) -> QueryFlags {
        self.query
    }

    pub fn pathspecs(&self) -> &[String] {
        &self.pathspecs
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn show_branch(&self) -> bool {
        self.show_branch
    }

    pub fn null_terminate(&self) -> bool {
        self.null_terminate
    }

    pub fn repository_path(&self) -> &Path {
        &self.repository_path
    }

    /// Terminator of each short format entry.
    pub fn line_terminator(&self) -> char {
        if self.null_terminate { '\0' } else { '\n' }
    }

    fn apply_untracked_files(&mut self, mode: UntrackedFiles) {
        match mode {
            UntrackedFiles::No => self.query.remove(QueryFlags::INCLUDE_UNTRACKED),
            UntrackedFiles::Normal => self.query.insert(QueryFlags::INCLUDE_UNTRACKED),
            UntrackedFiles::All => {
                self.query.insert(QueryFlags::INCLUDE_UNTRACKED);
                self.query.insert(QueryFlags::RECURSE_UNTRACKED_DIRS);
            }
        }
    }
}

impl TryFrom<StatusArgs> for StatusOptions {
    type Error = StatusError;

    fn try_from(args: StatusArgs) -> StatusResult<Self> {
        if args.paths.len() > MAX_PATHSPECS {
            return Err(StatusError::TooManyPathspecs { max: MAX_PATHSPECS });
        }

        let mut options = StatusOptions::default();

        options.format = match (args.short, args.long, args.porcelain) {
            (true, _, _) => OutputFormat::Short,
            (_, true, _) => OutputFormat::Long,
            (_, _, true) => OutputFormat::Porcelain,
            _ if args.null_terminate => OutputFormat::Porcelain,
            _ => OutputFormat::Long,
        };
        options.null_terminate = args.null_terminate;
        options.show_branch = args.branch || options.format.is_long();

        if args.ignored {
            options.query.insert(QueryFlags::INCLUDE_IGNORED);
        }
        for mode in args.untracked_files {
            options.apply_untracked_files(mode);
        }
        if args.ignore_submodules == Some(IgnoreSubmodules::All) {
            options.query.insert(QueryFlags::EXCLUDE_SUBMODULES);
        }
        if let Some(git_dir) = args.git_dir {
            options.repository_path = git_dir;
        }
        options.pathspecs = args.paths;

        Ok(options)
    }
}
