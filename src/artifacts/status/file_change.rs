use crate::artifacts::status::provider::SubmoduleLookup;
use crate::artifacts::status::status_record::{StatusFlags, StatusRecord};
use bitflags::bitflags;

/// Labels are padded to this width and followed by two spaces, so paths in the
/// long format line up (`typechange:` overflows by one).
const LABEL_WIDTH: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum StatusCode {
    #[default]
    Unmodified,
    Added,
    Modified,
    Deleted,
    Renamed,
    TypeChange,
    Untracked,
    Ignored,
}

/// HEAD→index precedence, lowest first. When several flags are set the
/// last matching entry wins.
pub const INDEX_PRECEDENCE: [(StatusFlags, StatusCode); 5] = [
    (StatusFlags::INDEX_NEW, StatusCode::Added),
    (StatusFlags::INDEX_MODIFIED, StatusCode::Modified),
    (StatusFlags::INDEX_DELETED, StatusCode::Deleted),
    (StatusFlags::INDEX_RENAMED, StatusCode::Renamed),
    (StatusFlags::INDEX_TYPECHANGE, StatusCode::TypeChange),
];

/// Index→workdir precedence, lowest first.
pub const WORKDIR_PRECEDENCE: [(StatusFlags, StatusCode); 5] = [
    (StatusFlags::WT_NEW, StatusCode::Untracked),
    (StatusFlags::WT_MODIFIED, StatusCode::Modified),
    (StatusFlags::WT_DELETED, StatusCode::Deleted),
    (StatusFlags::WT_RENAMED, StatusCode::Renamed),
    (StatusFlags::WT_TYPECHANGE, StatusCode::TypeChange),
];

fn highest_precedence(flags: StatusFlags, table: &[(StatusFlags, StatusCode)]) -> StatusCode {
    table
        .iter()
        .rev()
        .find(|(flag, _)| flags.contains(*flag))
        .map(|(_, code)| *code)
        .unwrap_or_default()
}

impl StatusCode {
    /// Code of the HEAD→index delta, ignoring untracked and ignored state.
    pub fn for_index(flags: StatusFlags) -> Self {
        highest_precedence(flags, &INDEX_PRECEDENCE)
    }

    /// Code of the index→workdir delta, ignoring ignored state.
    pub fn for_workdir(flags: StatusFlags) -> Self {
        highest_precedence(flags, &WORKDIR_PRECEDENCE)
    }

    pub fn as_char(&self) -> char {
        match self {
            StatusCode::Unmodified => ' ',
            StatusCode::Added => 'A',
            StatusCode::Modified => 'M',
            StatusCode::Deleted => 'D',
            StatusCode::Renamed => 'R',
            StatusCode::TypeChange => 'T',
            StatusCode::Untracked => '?',
            StatusCode::Ignored => '!',
        }
    }

    /// Label used by the long format; `None` for codes it never lists.
    pub fn label(&self) -> Option<&'static str> {
        match self {
            StatusCode::Added => Some("new file:"),
            StatusCode::Modified => Some("modified:"),
            StatusCode::Deleted => Some("deleted:"),
            StatusCode::Renamed => Some("renamed:"),
            StatusCode::TypeChange => Some("typechange:"),
            StatusCode::Unmodified | StatusCode::Untracked | StatusCode::Ignored => None,
        }
    }

    pub fn padded_label(&self) -> Option<String> {
        self.label()
            .map(|label| format!("{:<width$}  ", label, width = LABEL_WIDTH))
    }
}

impl std::fmt::Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

bitflags! {
    /// Dirtiness of a submodule working directory, as reported by the
    /// submodule lookup.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct SubmoduleStatus: u32 {
        const WD_UNINITIALIZED = 1 << 7;
        const WD_ADDED = 1 << 8;
        const WD_DELETED = 1 << 9;
        const WD_MODIFIED = 1 << 10;
        const WD_INDEX_MODIFIED = 1 << 11;
        const WD_WD_MODIFIED = 1 << 12;
        const WD_UNTRACKED = 1 << 13;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubmoduleAnnotation {
    NewCommits,
    ModifiedContent,
    UntrackedContent,
}

impl SubmoduleAnnotation {
    /// First matching bit wins.
    pub fn from_status(status: SubmoduleStatus) -> Option<Self> {
        use SubmoduleAnnotation::{ModifiedContent, NewCommits, UntrackedContent};

        const PRECEDENCE: [(SubmoduleStatus, SubmoduleAnnotation); 4] = [
            (SubmoduleStatus::WD_MODIFIED, NewCommits),
            (SubmoduleStatus::WD_INDEX_MODIFIED, ModifiedContent),
            (SubmoduleStatus::WD_WD_MODIFIED, ModifiedContent),
            (SubmoduleStatus::WD_UNTRACKED, UntrackedContent),
        ];

        PRECEDENCE
            .iter()
            .find(|(bit, _)| status.contains(*bit))
            .map(|(_, annotation)| *annotation)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SubmoduleAnnotation::NewCommits => "new commits",
            SubmoduleAnnotation::ModifiedContent => "modified content",
            SubmoduleAnnotation::UntrackedContent => "untracked content",
        }
    }
}

impl std::fmt::Display for SubmoduleAnnotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Classification {
    pub index: StatusCode,
    pub workdir: StatusCode,
    pub annotation: Option<SubmoduleAnnotation>,
}

impl Classification {
    /// Codes only; the submodule annotation is left empty.
    pub fn from_flags(flags: StatusFlags) -> Self {
        let mut index = StatusCode::for_index(flags);
        let mut workdir = StatusCode::for_workdir(flags);

        if flags.contains(StatusFlags::WT_NEW) && index == StatusCode::Unmodified {
            index = StatusCode::Untracked;
        }

        if flags.is_ignored() {
            index = StatusCode::Ignored;
            workdir = StatusCode::Ignored;
        }

        Self {
            index,
            workdir,
            annotation: None,
        }
    }

    pub fn classify(record: &StatusRecord, submodules: &dyn SubmoduleLookup) -> Self {
        Self {
            annotation: Self::annotate(record, submodules),
            ..Self::from_flags(record.flags)
        }
    }

    /// Pure untracked entries are listed after the change lines.
    pub fn is_untracked(&self) -> bool {
        self.index == StatusCode::Untracked && self.workdir == StatusCode::Untracked
    }

    fn annotate(
        record: &StatusRecord,
        submodules: &dyn SubmoduleLookup,
    ) -> Option<SubmoduleAnnotation> {
        if !record.workdir_kind.is_submodule() {
            return None;
        }

        let path = record.index_to_workdir.as_ref()?.new_path.as_deref()?;

        match submodules.submodule_status(path) {
            Ok(status) => SubmoduleAnnotation::from_status(status),
            Err(error) => {
                tracing::debug!(path = %path.display(), %error, "submodule lookup failed");
                None
            }
        }
    }
}
