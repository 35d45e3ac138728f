use crate::artifacts::status::file_change::StatusCode;
use crate::artifacts::status::status_record::{DeltaPaths, StatusFlags, StatusRecord, path_bytes};
use derive_new::new;
use std::io::Write;

const STAGED_HEADER: &[&str] = &[
    "# Changes to be committed:",
    "#   (use \"git reset HEAD <file>...\" to unstage)",
    "#",
];
const UNTRACKED_HEADER: &[&str] = &[
    "# Untracked files:",
    "#   (use \"git add <file>...\" to include in what will be committed)",
    "#",
];
const IGNORED_HEADER: &[&str] = &[
    "# Ignored files:",
    "#   (use \"git add -f <file>...\" to include in what will be committed)",
    "#",
];
const DISCARD_HINT: &str =
    "#   (use \"git checkout -- <file>...\" to discard changes in working directory)";
const NO_CHANGES_ADDED_HINT: &str =
    "no changes added to commit (use \"git add\" and/or \"git commit -a\")";

fn unstaged_header(removed_in_workdir: bool) -> Vec<String> {
    let add = if removed_in_workdir { "add/rm" } else { "add" };

    vec![
        "# Changes not staged for commit:".to_string(),
        format!("#   (use \"git {add} <file>...\" to update what will be committed)"),
        DISCARD_HINT.to_string(),
        "#".to_string(),
    ]
}

/// One titled group of the long format.
///
/// The header is only written when the section has at least one line. Lines
/// are raw bytes so paths keep the exact bytes git stores.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Section {
    header: Vec<String>,
    lines: Vec<Vec<u8>>,
    /// Close the section with a lone `#`.
    separated: bool,
}

impl Section {
    fn new(header: Vec<String>, lines: Vec<Vec<u8>>, separated: bool) -> Self {
        Self {
            header,
            lines,
            separated,
        }
    }

    fn from_static(header: &[&str], lines: Vec<Vec<u8>>, separated: bool) -> Self {
        let header = header.iter().map(|line| line.to_string()).collect();
        Self::new(header, lines, separated)
    }

    pub fn has_content(&self) -> bool {
        !self.lines.is_empty()
    }

    pub fn lines(&self) -> &[Vec<u8>] {
        &self.lines
    }

    fn write_to(&self, writer: &mut dyn Write) -> std::io::Result<()> {
        if !self.has_content() {
            return Ok(());
        }

        for line in &self.header {
            writeln!(writer, "{line}")?;
        }
        for line in &self.lines {
            writer.write_all(line)?;
            writer.write_all(b"\n")?;
        }
        if self.separated {
            writeln!(writer, "#")?;
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LongReport {
    pub staged: Section,
    pub unstaged: Section,
    pub untracked: Section,
    pub ignored: Section,
}

impl LongReport {
    /// Only unstaged changes: nudge towards `git add`.
    pub fn needs_hint(&self) -> bool {
        !self.staged.has_content() && self.unstaged.has_content()
    }

    pub fn write_to(&self, writer: &mut dyn Write) -> std::io::Result<()> {
        for section in [&self.staged, &self.unstaged, &self.untracked, &self.ignored] {
            section.write_to(writer)?;
        }
        if self.needs_hint() {
            writeln!(writer, "{NO_CHANGES_ADDED_HINT}")?;
        }

        Ok(())
    }
}

/// Grouped, commented report in the style of the classic `git status`.
#[derive(new)]
pub struct LongFormat<'r> {
    records: &'r [StatusRecord],
}

impl<'r> LongFormat<'r> {
    pub fn report(&self) -> LongReport {
        let (staged, removed_in_workdir) = self.staged_section();

        LongReport {
            staged,
            unstaged: self.unstaged_section(removed_in_workdir),
            untracked: self.listing_section(UNTRACKED_HEADER, StatusFlags::is_untracked),
            ignored: self.listing_section(IGNORED_HEADER, StatusFlags::is_ignored),
        }
    }

    pub fn render(&self, writer: &mut dyn Write) -> std::io::Result<()> {
        self.report().write_to(writer)
    }

    fn staged_section(&self) -> (Section, bool) {
        let mut removed_in_workdir = false;
        let mut lines = Vec::new();

        for record in self.records.iter().filter(|r| !r.flags.is_current()) {
            if record.flags.contains(StatusFlags::WT_DELETED) {
                removed_in_workdir = true;
            }

            let code = StatusCode::for_index(record.flags);
            if let Some(line) = describe(code, record.head_to_index.as_ref()) {
                lines.push(line);
            }
        }

        let section = Section::from_static(STAGED_HEADER, lines, true);
        (section, removed_in_workdir)
    }

    fn unstaged_section(&self, removed_in_workdir: bool) -> Section {
        let lines = self
            .records
            .iter()
            .filter(|r| !r.flags.is_current())
            .filter_map(|record| {
                let delta = record.index_to_workdir.as_ref()?;
                describe(StatusCode::for_workdir(record.flags), Some(delta))
            })
            .collect();

        Section::new(unstaged_header(removed_in_workdir), lines, true)
    }

    fn listing_section(&self, header: &[&str], include: fn(&StatusFlags) -> bool) -> Section {
        let lines = self
            .records
            .iter()
            .filter(|record| include(&record.flags))
            .filter_map(|record| record.workdir_path())
            .map(|path| [b"#\t".as_slice(), &*path_bytes(path)].concat())
            .collect();

        Section::from_static(header, lines, false)
    }
}

fn describe(code: StatusCode, delta: Option<&DeltaPaths>) -> Option<Vec<u8>> {
    let label = code.padded_label()?;
    let delta = delta?;

    let mut line = format!("#\t{label}").into_bytes();
    match delta.rename() {
        Some((old_path, new_path)) => {
            line.extend_from_slice(&path_bytes(old_path));
            line.extend_from_slice(b" -> ");
            line.extend_from_slice(&path_bytes(new_path));
        }
        None => line.extend_from_slice(&path_bytes(delta.current_path()?)),
    }

    Some(line)
}
