pub mod commands;
pub mod config;
pub mod error;
pub mod git;
pub mod output;
pub mod prompt;
pub mod workflow;

pub use error::{BranchError, Result};
