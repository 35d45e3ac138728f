//! `bit-status`: a `git status` front-end over a libgit2 repository
//!
//! - `areas`: the repository adapter that answers status queries
//! - `artifacts`: status records, classification and report formats
//! - `commands`: the status command itself
//! - `errors`: the crate error type

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod errors;
