//! Capability boundary between the renderers and a repository backend
//!
//! The renderers only ever see these traits, so they can be driven by a real
//! repository (see `areas::repository`) or by fabricated records in tests.

use crate::artifacts::branch::branch_name::HeadRef;
use crate::artifacts::status::file_change::SubmoduleStatus;
use crate::artifacts::status::options::StatusOptions;
use crate::artifacts::status::status_record::StatusRecord;
use crate::errors::StatusResult;
use std::path::Path;

pub trait StatusProvider {
    /// Ordered status records for the query described by `options`.
    fn query_status(&self, options: &StatusOptions) -> StatusResult<Vec<StatusRecord>>;

    /// The reference HEAD points at, or [`HeadRef::Unborn`].
    fn query_branch(&self) -> StatusResult<HeadRef>;
}

pub trait SubmoduleLookup {
    fn submodule_status(&self, path: &Path) -> StatusResult<SubmoduleStatus>;
}
