//! Current branch resolution
//!
//! Turns the reference HEAD points at into the name shown on the branch line.

pub mod branch_name;
