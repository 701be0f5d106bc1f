//! Read-only repository queries: presence, HEAD, other branches

use tracing::debug;

use crate::error::Result;
use crate::git::store::BranchStore;

use super::info::Head;

/// Answers "where are we" questions about a repository
pub struct Inspector<'a, S: BranchStore> {
    store: &'a S,
}

impl<'a, S: BranchStore> Inspector<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Current HEAD, or `None` when there is no usable repository.
    ///
    /// A missing repository is a normal outcome here, not an error; only a
    /// failure to run git at all is reported as `Err`.
    pub fn check_repository(&self) -> Result<Option<Head>> {
        let head = self.store.head()?;
        debug!(?head, "checked repository");
        Ok(head)
    }

    /// Local branch names other than the current one, in store order
    pub fn list_branches(&self, head: &Head) -> Result<Vec<String>> {
        let names: Vec<String> = self
            .store
            .branches()?
            .into_iter()
            .map(|b| b.name.trim().to_string())
            .filter(|name| !name.is_empty())
            .filter(|name| !head.is(name))
            .collect();

        debug!(count = names.len(), "listed other branches");
        Ok(names)
    }
}
