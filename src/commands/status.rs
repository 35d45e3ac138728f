use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::status::long_format::LongFormat;
use crate::artifacts::status::options::{OutputFormat, StatusOptions};
use crate::artifacts::status::provider::{StatusProvider, SubmoduleLookup};
use crate::artifacts::status::short_format::ShortFormat;
use crate::errors::StatusResult;
use derive_new::new;
use std::io::Write;

/// Queries the repository once and writes a single report.
#[derive(new)]
pub struct StatusCommand<'r, R> {
    repository: &'r R,
    options: &'r StatusOptions,
}

impl<'r, R> StatusCommand<'r, R>
where
    R: StatusProvider + SubmoduleLookup,
{
    pub fn run(&self, writer: &mut dyn Write) -> StatusResult<()> {
        let records = self.repository.query_status(self.options)?;
        tracing::debug!(
            records = records.len(),
            format = ?self.options.format(),
            "status query complete"
        );

        if self.options.show_branch() {
            let branch = BranchName::resolve(self.repository)?;
            writeln!(writer, "{}", branch.header(self.options.format()))?;
        }

        match self.options.format() {
            OutputFormat::Long => LongFormat::new(&records).render(writer)?,
            OutputFormat::Short | OutputFormat::Porcelain => {
                let terminator = self.options.line_terminator();
                ShortFormat::new(&records, self.repository, terminator).render(writer)?
            }
        }

        writer.flush()?;
        Ok(())
    }
}
