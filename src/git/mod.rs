//! Git operations for branch inspection, checkout and deletion

pub mod branch;
pub mod runner;
pub mod store;

#[cfg(test)]
pub(crate) mod fake;

pub use branch::{Branch, DeleteFailure, DeleteReport, Head, Inspector, Operator};
pub use store::{BranchStore, GitStore};
