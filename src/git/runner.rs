//! Git command runner
//!
//! `GitStore` spawns git only through these helpers, and each call is logged
//! at debug level.

use anyhow::{bail, Context, Result};
use std::path::Path;
use std::process::{Command, Output};
use tracing::debug;

/// Spawn git in `repo_root` and hand back its Output untouched.
fn run_git(args: &[&str], repo_root: &Path) -> Result<Output> {
    debug!(args = %args.join(" "), dir = %repo_root.display(), "git");

    Command::new("git")
        .args(args)
        .current_dir(repo_root)
        .output()
        .with_context(|| format!("Failed to execute: git {}", args.join(" ")))
}

/// Run a git command that must succeed: the branch listing, checkout and
/// branch deletion.
///
/// The error carries git's stderr, which becomes the reason shown for a failed
/// checkout or for each branch that could not be deleted.
pub fn run_git_checked(args: &[&str], repo_root: &Path) -> Result<String> {
    let output = run_git(args, repo_root)?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let cmd = args.first().unwrap_or(&"");
        bail!("git {cmd} failed: {}", stderr.trim());
    }
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Run a HEAD lookup where a non-zero exit is an answer, not a failure.
///
/// Outside a repository, on an unborn HEAD or a detached HEAD this is `None`.
/// Spawn failures are still errors.
pub fn run_git_optional(args: &[&str], repo_root: &Path) -> Result<Option<String>> {
    let output = run_git(args, repo_root)?;
    if !output.status.success() {
        return Ok(None);
    }
    Ok(Some(
        String::from_utf8_lossy(&output.stdout).trim().to_string(),
    ))
}
