use crate::artifacts::status::file_change::{Classification, StatusCode};
use crate::artifacts::status::provider::SubmoduleLookup;
use crate::artifacts::status::status_record::{StatusRecord, path_bytes};
use derive_new::new;
use std::io::Write;
use std::path::Path;

/// Two-column `XY path` format, shared by `--short` and `--porcelain`.
///
/// Lines are raw bytes: paths are written exactly as git stores them.
#[derive(new)]
pub struct ShortFormat<'r> {
    records: &'r [StatusRecord],
    submodules: &'r dyn SubmoduleLookup,
    terminator: char,
}

impl<'r> ShortFormat<'r> {
    pub fn lines(&self) -> Vec<Vec<u8>> {
        let changes = self
            .records
            .iter()
            .filter(|record| !record.flags.is_current())
            .filter_map(|record| self.change_line(record));

        let untracked = self
            .records
            .iter()
            .filter(|record| record.flags.is_untracked())
            .filter_map(|record| record.workdir_path())
            .map(|path| [b"?? ".as_slice(), &*path_bytes(path)].concat());

        changes.chain(untracked).collect()
    }

    pub fn render(&self, writer: &mut dyn Write) -> std::io::Result<()> {
        let mut buffer = [0; 4];
        let terminator = self.terminator.encode_utf8(&mut buffer).as_bytes();

        for line in self.lines() {
            writer.write_all(&line)?;
            writer.write_all(terminator)?;
        }

        Ok(())
    }

    fn change_line(&self, record: &StatusRecord) -> Option<Vec<u8>> {
        let classification = Classification::classify(record, self.submodules);
        if classification.is_untracked() {
            return None;
        }

        let paths = record.display_paths();
        let renamed_in_index = classification.index == StatusCode::Renamed;
        let renamed_in_workdir = classification.workdir == StatusCode::Renamed;

        let codes = format!("{}{} ", classification.index, classification.workdir);
        let mut line = codes.into_bytes();
        line.extend_from_slice(&path_bytes(paths.old?));
        match (renamed_in_index, renamed_in_workdir) {
            (true, true) => {
                push_path(&mut line, paths.staged);
                push_path(&mut line, paths.workdir);
            }
            (true, false) => push_path(&mut line, paths.staged),
            (false, true) => push_path(&mut line, paths.workdir),
            (false, false) => {}
        }
        if let Some(annotation) = classification.annotation {
            line.extend_from_slice(format!(" ({annotation})").as_bytes());
        }

        Some(line)
    }
}

/// A missing path still gets its separating space.
fn push_path(line: &mut Vec<u8>, path: Option<&Path>) {
    line.push(b' ');
    if let Some(path) = path {
        line.extend_from_slice(&path_bytes(path));
    }
}
