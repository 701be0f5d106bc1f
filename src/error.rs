//! Error taxonomy and exit codes

use std::path::PathBuf;
use std::process::ExitCode;

use thiserror::Error;

use crate::git::DeleteReport;

pub type Result<T> = std::result::Result<T, BranchError>;

#[derive(Debug, Error)]
pub enum BranchError {
    #[error("Not a git repository (or any of the parent directories)")]
    NoRepository,

    #[error("No other branches in the repository")]
    NoOtherBranches,

    #[error("No branch selected, exit.")]
    EmptySelection,

    #[error("Cancelled")]
    Cancelled,

    #[error("Failed to checkout {branch}: {message}")]
    Checkout { branch: String, message: String },

    #[error("{}", format_delete_failures(.0))]
    Delete(DeleteReport),

    #[error("Prompt failed: {0}")]
    Prompt(#[from] std::io::Error),

    #[error("Failed to load config {}: {reason:#}", path.display())]
    Config { path: PathBuf, reason: anyhow::Error },

    #[error(transparent)]
    Git(#[from] anyhow::Error),
}

impl BranchError {
    /// Process exit code for this error.
    ///
    /// "Nothing to do" outcomes get their own codes so scripts can tell them
    /// apart from real failures. 2 is left to clap for usage errors.
    pub fn exit_code(&self) -> u8 {
        match self {
            BranchError::NoRepository => 3,
            BranchError::NoOtherBranches => 4,
            BranchError::EmptySelection => 5,
            BranchError::Cancelled => 130,
            BranchError::Checkout { .. }
            | BranchError::Delete(_)
            | BranchError::Prompt(_)
            | BranchError::Config { .. }
            | BranchError::Git(_) => 1,
        }
    }
}

impl From<&BranchError> for ExitCode {
    fn from(err: &BranchError) -> Self {
        ExitCode::from(err.exit_code())
    }
}

fn format_delete_failures(report: &DeleteReport) -> String {
    let mut out = format!(
        "Failed to delete {} of {} branches:",
        report.failed.len(),
        report.failed.len() + report.deleted.len()
    );
    for failure in &report.failed {
        out.push_str(&format!("\n  {}: {}", failure.branch, failure.reason));
    }
    out
}
