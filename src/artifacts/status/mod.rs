//! Working tree status reporting
//!
//! The repository produces one [`status_record::StatusRecord`] per changed
//! path. Records are classified into two-letter codes and rendered either
//! as the long, commented report or as the short `XY path` listing.
//!
//! ## Components
//!
//! - `options`: command-line arguments and the validated query options
//! - `provider`: the traits the repository backend implements
//! - `status_record`: raw per-path status flags and delta paths
//! - `file_change`: status codes and submodule annotations
//! - `long_format`: the sectioned long report
//! - `short_format`: the short and porcelain listing

pub mod file_change;
pub mod long_format;
pub mod options;
pub mod provider;
pub mod short_format;
pub mod status_record;
