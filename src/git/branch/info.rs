//! Branch records and parsing of the typed branch listing

use anyhow::{bail, Result};

/// Format passed to `git for-each-ref`: the HEAD marker column and the full
/// ref name, NUL separated so branch names never need quoting.
pub(crate) const BRANCH_FORMAT: &str = "--format=%(HEAD)%00%(refname)";

const HEADS_PREFIX: &str = "refs/heads/";

/// A local branch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch {
    pub name: String,
    pub is_current: bool,
}

impl Branch {
    pub fn new(name: impl Into<String>, is_current: bool) -> Self {
        Self {
            name: name.into(),
            is_current,
        }
    }
}

/// What the working tree currently points at
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Head {
    /// HEAD is attached to a local branch
    Branch(String),
    /// HEAD points directly at a commit; no branch is current
    Detached,
}

impl Head {
    /// The current branch name, if HEAD is attached
    pub fn branch_name(&self) -> Option<&str> {
        match self {
            Head::Branch(name) => Some(name),
            Head::Detached => None,
        }
    }

    pub fn is(&self, branch: &str) -> bool {
        self.branch_name() == Some(branch)
    }
}

/// Parse `git for-each-ref` output produced with [`BRANCH_FORMAT`].
///
/// Each line is `<marker>\0refs/heads/<name>` where the marker is `*` for the
/// checked-out branch and a space otherwise. Blank lines are skipped.
pub(crate) fn parse_branch_records(output: &str) -> Result<Vec<Branch>> {
    let mut branches = Vec::new();

    for line in output.lines() {
        if line.trim().is_empty() {
            continue;
        }

        let Some((marker, refname)) = line.split_once('\0') else {
            bail!("Unexpected branch record: {line:?}");
        };

        let name = refname
            .trim()
            .strip_prefix(HEADS_PREFIX)
            .unwrap_or(refname.trim());
        if name.is_empty() {
            continue;
        }

        branches.push(Branch::new(name, marker.trim() == "*"));
    }

    Ok(branches)
}
