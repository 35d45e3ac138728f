//! libgit2-backed status provider
//!
//! Opens the repository the options point at and translates libgit2 status
//! entries, HEAD and submodule state into the crate's own types.

use crate::artifacts::branch::branch_name::HeadRef;
use crate::artifacts::status::file_change::SubmoduleStatus;
use crate::artifacts::status::options::{QueryFlags, StatusOptions};
use crate::artifacts::status::provider::{StatusProvider, SubmoduleLookup};
use crate::artifacts::status::status_record::{DeltaPaths, FileKind, StatusFlags, StatusRecord};
use crate::errors::{StatusError, StatusResult};
use std::ffi::OsStr;
use std::path::Path;

pub struct Repository {
    inner: git2::Repository,
}

impl Repository {
    /// Opens the repository containing `path`, searching parent directories.
    ///
    /// Bare repositories are rejected: there is no working tree to report on.
    pub fn open(path: &Path) -> StatusResult<Self> {
        let flags = git2::RepositoryOpenFlags::empty();
        let inner = match git2::Repository::open_ext(path, flags, &[] as &[&OsStr]) {
            Ok(inner) => inner,
            Err(e) => {
                let message = format!("Could not open repository '{}'", path.display());
                return Err(StatusError::provider(message, e.message()));
            }
        };

        if inner.is_bare() {
            return Err(StatusError::BareRepository(inner.path().to_path_buf()));
        }

        tracing::debug!(path = %inner.path().display(), "opened repository");
        Ok(Self { inner })
    }

    pub fn path(&self) -> &Path {
        self.inner.path()
    }

    fn git_status_options(options: &StatusOptions) -> git2::StatusOptions {
        let query = options.query();
        let mut git_options = git2::StatusOptions::new();

        git_options
            .show(git2::StatusShow::IndexAndWorkdir)
            .include_untracked(query.contains(QueryFlags::INCLUDE_UNTRACKED))
            .include_ignored(query.contains(QueryFlags::INCLUDE_IGNORED))
            .recurse_untracked_dirs(query.contains(QueryFlags::RECURSE_UNTRACKED_DIRS))
            .exclude_submodules(query.contains(QueryFlags::EXCLUDE_SUBMODULES))
            .renames_head_to_index(query.contains(QueryFlags::RENAMES_HEAD_TO_INDEX))
            .sort_case_sensitively(query.contains(QueryFlags::SORT_CASE_SENSITIVELY));

        for pathspec in options.pathspecs() {
            git_options.pathspec(pathspec.as_str());
        }

        git_options
    }
}

fn map_status_flags(status: git2::Status) -> StatusFlags {
    use git2::Status as Git;

    const FLAGS: [(Git, StatusFlags); 11] = [
        (Git::INDEX_NEW, StatusFlags::INDEX_NEW),
        (Git::INDEX_MODIFIED, StatusFlags::INDEX_MODIFIED),
        (Git::INDEX_DELETED, StatusFlags::INDEX_DELETED),
        (Git::INDEX_RENAMED, StatusFlags::INDEX_RENAMED),
        (Git::INDEX_TYPECHANGE, StatusFlags::INDEX_TYPECHANGE),
        (Git::WT_NEW, StatusFlags::WT_NEW),
        (Git::WT_MODIFIED, StatusFlags::WT_MODIFIED),
        (Git::WT_DELETED, StatusFlags::WT_DELETED),
        (Git::WT_RENAMED, StatusFlags::WT_RENAMED),
        (Git::WT_TYPECHANGE, StatusFlags::WT_TYPECHANGE),
        (Git::IGNORED, StatusFlags::IGNORED),
    ];

    FLAGS
        .iter()
        .filter(|(git_flag, _)| status.contains(*git_flag))
        .fold(StatusFlags::CURRENT, |flags, (_, flag)| flags | *flag)
}

fn map_submodule_status(status: git2::SubmoduleStatus) -> SubmoduleStatus {
    use git2::SubmoduleStatus as Git;

    const FLAGS: [(Git, SubmoduleStatus); 7] = [
        (Git::WD_UNINITIALIZED, SubmoduleStatus::WD_UNINITIALIZED),
        (Git::WD_ADDED, SubmoduleStatus::WD_ADDED),
        (Git::WD_DELETED, SubmoduleStatus::WD_DELETED),
        (Git::WD_MODIFIED, SubmoduleStatus::WD_MODIFIED),
        (Git::WD_INDEX_MODIFIED, SubmoduleStatus::WD_INDEX_MODIFIED),
        (Git::WD_WD_MODIFIED, SubmoduleStatus::WD_WD_MODIFIED),
        (Git::WD_UNTRACKED, SubmoduleStatus::WD_UNTRACKED),
    ];

    FLAGS
        .iter()
        .filter(|(git_flag, _)| status.contains(*git_flag))
        .fold(SubmoduleStatus::empty(), |flags, (_, flag)| flags | *flag)
}

fn is_unborn(error: &git2::Error) -> bool {
    use git2::ErrorCode;

    matches!(error.code(), ErrorCode::UnbornBranch | ErrorCode::NotFound)
}

fn file_kind(mode: git2::FileMode) -> FileKind {
    match mode {
        git2::FileMode::Tree => FileKind::Tree,
        git2::FileMode::Blob | git2::FileMode::BlobGroupWritable => FileKind::Blob,
        git2::FileMode::BlobExecutable => FileKind::BlobExecutable,
        git2::FileMode::Link => FileKind::Link,
        git2::FileMode::Commit => FileKind::Commit,
        git2::FileMode::Unreadable => FileKind::Unreadable,
    }
}

fn delta_paths(delta: &git2::DiffDelta<'_>) -> DeltaPaths {
    DeltaPaths::new(
        delta.old_file().path().map(Path::to_path_buf),
        delta.new_file().path().map(Path::to_path_buf),
    )
}

fn status_record(entry: &git2::StatusEntry<'_>) -> StatusRecord {
    let index_to_workdir = entry.index_to_workdir();
    let workdir_kind = index_to_workdir
        .as_ref()
        .map(|delta| file_kind(delta.new_file().mode()))
        .unwrap_or_default();

    StatusRecord::new(
        map_status_flags(entry.status()),
        entry.head_to_index().as_ref().map(delta_paths),
        index_to_workdir.as_ref().map(delta_paths),
    )
    .with_workdir_kind(workdir_kind)
}

impl StatusProvider for Repository {
    fn query_status(&self, options: &StatusOptions) -> StatusResult<Vec<StatusRecord>> {
        let mut git_options = Self::git_status_options(options);
        let statuses = self
            .inner
            .statuses(Some(&mut git_options))
            .map_err(|e| StatusError::provider("Could not get status", e.message()))?;

        Ok(statuses.iter().map(|entry| status_record(&entry)).collect())
    }

    fn query_branch(&self) -> StatusResult<HeadRef> {
        match self.inner.head() {
            Ok(head) => {
                let name = String::from_utf8_lossy(head.name_bytes());
                Ok(HeadRef::Reference(name.into_owned()))
            }
            Err(e) if is_unborn(&e) => Ok(HeadRef::Unborn),
            Err(e) => Err(StatusError::provider("failed to get current branch", e.message())),
        }
    }
}

impl SubmoduleLookup for Repository {
    fn submodule_status(&self, path: &Path) -> StatusResult<SubmoduleStatus> {
        let name = path
            .to_str()
            .ok_or_else(|| StatusError::provider("invalid submodule path", path.display()))?;
        let status = self
            .inner
            .submodule_status(name, git2::SubmoduleIgnore::Unspecified)?;

        Ok(map_submodule_status(status))
    }
}
