//! In-memory store for unit tests

use std::cell::RefCell;
use std::collections::HashMap;

use anyhow::{anyhow, bail, Result};

use super::branch::{Branch, Head};
use super::store::BranchStore;

/// A mutation the store was asked to perform
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Checkout(String),
    Delete { branch: String, force: bool },
}

#[derive(Debug, Default)]
pub struct FakeStore {
    branches: RefCell<Vec<Branch>>,
    calls: RefCell<Vec<Call>>,
    refusals: HashMap<String, String>,
    no_repository: bool,
}

impl FakeStore {
    /// Branches in listing order; a trailing `*` marks the current one
    pub fn with_branches(names: &[&str]) -> Self {
        let branches = names
            .iter()
            .map(|n| match n.strip_suffix('*') {
                Some(name) => Branch::new(name, true),
                None => Branch::new(*n, false),
            })
            .collect();
        Self {
            branches: RefCell::new(branches),
            ..Self::default()
        }
    }

    pub fn without_repository() -> Self {
        Self {
            no_repository: true,
            ..Self::default()
        }
    }

    /// Make checkout of `branch`, and deleting it without force, fail with `reason`
    pub fn refuse(mut self, branch: &str, reason: &str) -> Self {
        self.refusals.insert(branch.to_string(), reason.to_string());
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn names(&self) -> Vec<String> {
        self.branches.borrow().iter().map(|b| b.name.clone()).collect()
    }

    pub fn current(&self) -> Option<String> {
        self.branches
            .borrow()
            .iter()
            .find(|b| b.is_current)
            .map(|b| b.name.clone())
    }
}

impl BranchStore for FakeStore {
    fn head(&self) -> Result<Option<Head>> {
        if self.no_repository || self.branches.borrow().is_empty() {
            return Ok(None);
        }
        Ok(Some(match self.current() {
            Some(name) => Head::Branch(name),
            None => Head::Detached,
        }))
    }

    fn branches(&self) -> Result<Vec<Branch>> {
        Ok(self.branches.borrow().clone())
    }

    fn checkout(&self, name: &str) -> Result<()> {
        self.calls.borrow_mut().push(Call::Checkout(name.to_string()));
        if let Some(reason) = self.refusals.get(name) {
            bail!("{reason}");
        }

        let mut branches = self.branches.borrow_mut();
        if !branches.iter().any(|b| b.name == name) {
            bail!("pathspec '{name}' did not match any file(s) known to git");
        }
        for b in branches.iter_mut() {
            b.is_current = b.name == name;
        }
        Ok(())
    }

    fn delete(&self, name: &str, force: bool) -> Result<()> {
        self.calls.borrow_mut().push(Call::Delete {
            branch: name.to_string(),
            force,
        });
        if let Some(reason) = self.refusals.get(name) {
            if !force {
                bail!("{reason}");
            }
        }

        let mut branches = self.branches.borrow_mut();
        let pos = branches
            .iter()
            .position(|b| b.name == name)
            .ok_or_else(|| anyhow!("branch '{name}' not found"))?;
        branches.remove(pos);
        Ok(())
    }
}
