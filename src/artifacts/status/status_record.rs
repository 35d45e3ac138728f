//! Per-path status records handed over by a status provider
//!
//! A record describes how one path differs between HEAD, the index and the
//! working tree. Records are produced upstream (diffing, rename detection and
//! directory walking all happen there) and are only read by the renderers.

use bitflags::bitflags;
use derive_new::new;
use std::borrow::Cow;
use std::path::{Path, PathBuf};

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
    pub struct StatusFlags: u32 {
        const INDEX_NEW = 1 << 0;
        const INDEX_MODIFIED = 1 << 1;
        const INDEX_DELETED = 1 << 2;
        const INDEX_RENAMED = 1 << 3;
        const INDEX_TYPECHANGE = 1 << 4;

        const WT_NEW = 1 << 7;
        const WT_MODIFIED = 1 << 8;
        const WT_DELETED = 1 << 9;
        const WT_TYPECHANGE = 1 << 10;
        const WT_RENAMED = 1 << 11;

        const IGNORED = 1 << 14;
    }
}

impl StatusFlags {
    /// No difference in either delta.
    pub const CURRENT: StatusFlags = StatusFlags::empty();

    pub fn is_current(&self) -> bool {
        *self == Self::CURRENT
    }

    /// Exactly `WT_NEW`: a path git knows nothing about.
    pub fn is_untracked(&self) -> bool {
        *self == Self::WT_NEW
    }

    pub fn is_ignored(&self) -> bool {
        self.contains(Self::IGNORED)
    }
}

/// Mode of the file on the new side of a delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileKind {
    #[default]
    Unreadable,
    Tree,
    Blob,
    BlobExecutable,
    Link,
    /// A gitlink, i.e. the checked out commit of a submodule.
    Commit,
}

impl FileKind {
    pub fn is_submodule(&self) -> bool {
        matches!(self, FileKind::Commit)
    }
}

/// Old and new path of one side of a record (HEAD→index or index→workdir).
#[derive(Debug, Clone, PartialEq, Eq, Default, new)]
pub struct DeltaPaths {
    pub old_path: Option<PathBuf>,
    pub new_path: Option<PathBuf>,
}

impl DeltaPaths {
    pub fn unchanged(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self::new(Some(path.clone()), Some(path))
    }

    pub fn renamed(old_path: impl Into<PathBuf>, new_path: impl Into<PathBuf>) -> Self {
        Self::new(Some(old_path.into()), Some(new_path.into()))
    }

    /// The path shown when the delta is not displayed as a rename.
    pub fn current_path(&self) -> Option<&Path> {
        self.old_path.as_deref().or(self.new_path.as_deref())
    }

    /// Both sides, only when they are known and differ.
    pub fn rename(&self) -> Option<(&Path, &Path)> {
        match (self.old_path.as_deref(), self.new_path.as_deref()) {
            (Some(old_path), Some(new_path)) if old_path != new_path => Some((old_path, new_path)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, new)]
pub struct StatusRecord {
    pub flags: StatusFlags,
    pub head_to_index: Option<DeltaPaths>,
    pub index_to_workdir: Option<DeltaPaths>,
    #[new(default)]
    pub workdir_kind: FileKind,
}

impl StatusRecord {
    pub fn untracked(path: impl Into<PathBuf>) -> Self {
        Self::new(StatusFlags::WT_NEW, None, Some(DeltaPaths::unchanged(path)))
    }

    pub fn ignored(path: impl Into<PathBuf>) -> Self {
        Self::new(
            StatusFlags::IGNORED,
            None,
            Some(DeltaPaths::unchanged(path)),
        )
    }

    pub fn with_workdir_kind(mut self, kind: FileKind) -> Self {
        self.workdir_kind = kind;
        self
    }

    /// Path listed in the untracked and ignored sections.
    pub fn workdir_path(&self) -> Option<&Path> {
        self.index_to_workdir
            .as_ref()
            .and_then(|delta| delta.old_path.as_deref())
            .or_else(|| self.display_paths().old)
    }

    /// Paths used by the short format.
    ///
    /// HEAD→index paths win; the index→workdir old path fills whatever the
    /// index side leaves blank, and the workdir new path is the rename target.
    pub fn display_paths(&self) -> DisplayPaths<'_> {
        let mut old = None;
        let mut staged = None;
        let mut workdir = None;

        if let Some(delta) = &self.head_to_index {
            old = delta.old_path.as_deref();
            staged = delta.new_path.as_deref();
        }
        if let Some(delta) = &self.index_to_workdir {
            old = old.or(delta.old_path.as_deref());
            staged = staged.or(delta.old_path.as_deref());
            workdir = delta.new_path.as_deref();
        }

        DisplayPaths {
            old: old.or(staged).or(workdir),
            staged,
            workdir,
        }
    }
}

/// Bytes of `path` as git stores them, so non UTF-8 names are written back
/// unchanged.
#[cfg(unix)]
pub fn path_bytes(path: &Path) -> Cow<'_, [u8]> {
    use std::os::unix::ffi::OsStrExt;

    Cow::Borrowed(path.as_os_str().as_bytes())
}

#[cfg(not(unix))]
pub fn path_bytes(path: &Path) -> Cow<'_, [u8]> {
    Cow::Owned(path.to_string_lossy().into_owned().into_bytes())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayPaths<'r> {
    pub old: Option<&'r Path>,
    pub staged: Option<&'r Path>,
    pub workdir: Option<&'r Path>,
}
