//! Command implementations
//!
//! - `status`: queries the repository once and writes one report

pub mod status;
