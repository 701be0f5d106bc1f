//! Branch mutations: checkout and best-effort multi-delete

use tracing::{info, warn};

use crate::error::{BranchError, Result};
use crate::git::store::BranchStore;

/// A branch that could not be deleted, with git's reason
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteFailure {
    pub branch: String,
    pub reason: String,
}

/// Outcome of a delete batch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteReport {
    pub deleted: Vec<String>,
    pub failed: Vec<DeleteFailure>,
}

impl DeleteReport {
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Applies checkout and delete to a store
pub struct Operator<'a, S: BranchStore> {
    store: &'a S,
    force_delete: bool,
}

impl<'a, S: BranchStore> Operator<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self {
            store,
            force_delete: false,
        }
    }

    /// Use `branch -D` semantics: delete even when unmerged work would be lost
    pub fn force_delete(mut self, force: bool) -> Self {
        self.force_delete = force;
        self
    }

    /// Switch the working tree to `branch`.
    ///
    /// Checking out the branch that is already current succeeds without
    /// touching the store.
    pub fn checkout(&self, branch: &str) -> Result<()> {
        let already_current = self
            .store
            .head()?
            .is_some_and(|head| head.is(branch));
        if already_current {
            info!(branch, "already on branch");
            return Ok(());
        }

        self.store
            .checkout(branch)
            .map_err(|e| BranchError::Checkout {
                branch: branch.to_string(),
                message: format!("{e:#}"),
            })?;

        info!(branch, "checked out");
        Ok(())
    }

    /// Delete every named branch independently.
    ///
    /// One failure never stops the rest of the batch and nothing already
    /// deleted is restored. Returns the report on full success, or
    /// [`BranchError::Delete`] carrying it when any branch failed. The
    /// current branch is always refused.
    pub fn delete_branches(&self, branches: &[String]) -> Result<DeleteReport> {
        let mut report = DeleteReport::default();
        if branches.is_empty() {
            return Ok(report);
        }

        let head = self.store.head()?;

        for branch in branches {
            if head.as_ref().is_some_and(|h| h.is(branch)) {
                warn!(branch = %branch, "refusing to delete current branch");
                report.failed.push(DeleteFailure {
                    branch: branch.clone(),
                    reason: "cannot delete the current branch".to_string(),
                });
                continue;
            }

            match self.store.delete(branch, self.force_delete) {
                Ok(()) => {
                    info!(branch = %branch, "deleted");
                    report.deleted.push(branch.clone());
                }
                Err(e) => {
                    warn!(branch = %branch, error = %e, "delete failed");
                    report.failed.push(DeleteFailure {
                        branch: branch.clone(),
                        reason: format!("{e:#}"),
                    });
                }
            }
        }

        if report.is_clean() {
            Ok(report)
        } else {
            Err(BranchError::Delete(report))
        }
    }
}
