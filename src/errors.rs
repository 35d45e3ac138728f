//! Error types for `bit-status`
//!
//! Every fallible library operation returns [`StatusResult<T>`]. The binary
//! wraps these in `anyhow` and aborts on the first one.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum StatusError {
    /// More path filters than the query supports.
    #[error("only {max} pathspecs are supported")]
    TooManyPathspecs { max: usize },

    #[error("unsupported option: {0}")]
    UnsupportedOption(String),

    /// Status has no meaning without a working tree.
    #[error("cannot report status on bare repository: {}", .0.display())]
    BareRepository(PathBuf),

    /// The repository backend failed for a reason other than an unborn HEAD.
    #[error("{context}: {message}")]
    Provider { context: String, message: String },

    /// Writing the report failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl StatusError {
    pub fn provider(context: impl Into<String>, message: impl std::fmt::Display) -> Self {
        StatusError::Provider {
            context: context.into(),
            message: message.to_string(),
        }
    }

    /// Raised while validating options, before any query runs.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            StatusError::TooManyPathspecs { .. } | StatusError::UnsupportedOption(_)
        )
    }
}

impl From<git2::Error> for StatusError {
    fn from(error: git2::Error) -> Self {
        StatusError::provider("git error", error.message())
    }
}

pub type StatusResult<T> = Result<T, StatusError>;
