use crate::artifacts::status::options::OutputFormat;
use crate::artifacts::status::provider::StatusProvider;
use crate::errors::StatusResult;

const REF_PREFIX: &str = "refs/heads/";

/// What HEAD resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadRef {
    /// No commits yet, or HEAD points nowhere.
    Unborn,
    /// Full reference name, e.g. `refs/heads/main`, or `HEAD` when detached.
    Reference(String),
}

impl HeadRef {
    pub fn branch(name: impl Into<String>) -> Self {
        HeadRef::Reference(format!("{REF_PREFIX}{}", name.into()))
    }

    pub fn detached() -> Self {
        HeadRef::Reference("HEAD".to_string())
    }
}

/// Display name of the current branch; `None` when HEAD is unborn.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BranchName(Option<String>);

impl BranchName {
    pub fn resolve(provider: &dyn StatusProvider) -> StatusResult<Self> {
        Ok(Self::from(provider.query_branch()?))
    }

    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }

    pub fn header(&self, format: OutputFormat) -> String {
        match (format.is_long(), self.as_deref()) {
            (true, name) => {
                let name = name.unwrap_or("Not currently on any branch.");
                format!("# On branch {name}")
            }
            (false, name) => format!("## {}", name.unwrap_or("HEAD (no branch)")),
        }
    }
}

impl From<HeadRef> for BranchName {
    fn from(head: HeadRef) -> Self {
        match head {
            HeadRef::Unborn => BranchName(None),
            HeadRef::Reference(name) => {
                let name = name
                    .strip_prefix(REF_PREFIX)
                    .map(str::to_string)
                    .unwrap_or(name);
                BranchName(Some(name))
            }
        }
    }
}
