//! The version-control store seam
//!
//! [`BranchStore`] is the narrow surface the inspector and operator need from
//! git. [`GitStore`] implements it by shelling out to the `git` executable in
//! a given working directory.

use anyhow::Result;
use std::path::PathBuf;

use super::branch::{parse_branch_records, Branch, Head, BRANCH_FORMAT};
use super::runner::{run_git_checked, run_git_optional};

/// Queries and mutations over local branches
pub trait BranchStore {
    /// Repository presence and HEAD state.
    ///
    /// `Ok(None)` when the directory (and its ancestors) holds no repository,
    /// or when the repository has no commits yet.
    fn head(&self) -> Result<Option<Head>>;

    /// All local branches in the store's native order
    fn branches(&self) -> Result<Vec<Branch>>;

    /// Switch the working tree to `name`
    fn checkout(&self, name: &str) -> Result<()>;

    /// Delete one local branch; `force` also drops unmerged work
    fn delete(&self, name: &str, force: bool) -> Result<()>;
}

/// [`BranchStore`] backed by the git CLI
#[derive(Debug, Clone)]
pub struct GitStore {
    workdir: PathBuf,
}

impl GitStore {
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
        }
    }
}

impl BranchStore for GitStore {
    fn head(&self) -> Result<Option<Head>> {
        if run_git_optional(&["rev-parse", "--git-dir"], &self.workdir)?.is_none() {
            return Ok(None);
        }

        // An unborn HEAD has a symbolic ref but nothing to resolve to
        if run_git_optional(&["rev-parse", "--verify", "--quiet", "HEAD"], &self.workdir)?
            .is_none()
        {
            return Ok(None);
        }

        let symbolic =
            run_git_optional(&["symbolic-ref", "--quiet", "--short", "HEAD"], &self.workdir)?;
        let head = match symbolic {
            Some(name) if !name.is_empty() => Head::Branch(name),
            _ => Head::Detached,
        };
        Ok(Some(head))
    }

    fn branches(&self) -> Result<Vec<Branch>> {
        let stdout = run_git_checked(
            &["for-each-ref", BRANCH_FORMAT, "refs/heads/"],
            &self.workdir,
        )?;
        parse_branch_records(&stdout)
    }

    fn checkout(&self, name: &str) -> Result<()> {
        run_git_checked(&["checkout", name, "--"], &self.workdir)?;
        Ok(())
    }

    fn delete(&self, name: &str, force: bool) -> Result<()> {
        let flag = if force { "-D" } else { "-d" };

        run_git_checked(&["branch", flag, name], &self.workdir)?;
        Ok(())
    }
}
