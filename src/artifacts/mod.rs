//! Status data structures
//!
//! - `branch`: HEAD resolution and the branch header line
//! - `status`: status records, their classification and the report formats

pub mod branch;
pub mod status;
