//! Repository access
//!
//! - `repository`: opens a repository and answers status, HEAD and submodule queries
pub mod repository;
