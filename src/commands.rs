//! Top-level command: wire config, git, prompts and the workflow together

use std::path::PathBuf;

use anyhow::{anyhow, Context};

use crate::config::Config;
use crate::error::{BranchError, Result};
use crate::git::{DeleteReport, GitStore, Head, Inspector, Operator};
use crate::output::{highlight, info, success};
use crate::prompt::TerminalPrompter;
use crate::workflow::{self, AbortReason, Applied, Mode, State, Workflow};

#[derive(Debug, Clone, Default)]
pub struct Options {
    pub mode: Mode,
    /// Force-delete regardless of config
    pub force: bool,
    pub no_color: bool,
    pub config: Option<PathBuf>,
}

/// Run one interactive session in the current directory
pub fn execute(options: Options) -> Result<()> {
    let config = Config::load(options.config.as_deref())?;
    if options.no_color || !config.ui.color {
        colored::control::set_override(false);
    }

    let workdir = std::env::current_dir().context("Failed to read current directory")?;
    let store = GitStore::new(workdir);

    let prepared = workflow::prepare(&Inspector::new(&store))?;
    match &prepared.head {
        Head::Branch(name) => info(&format!("Current branch is {}", highlight(name))),
        Head::Detached => info("HEAD is detached"),
    }

    let operator = Operator::new(&store).force_delete(options.force || config.delete.force);
    let mut prompter = TerminalPrompter::new(config.ui.page_size);

    let outcome = Workflow::new(options.mode, prepared.branches, operator, &mut prompter).run();
    finish(outcome)
}

/// Report a finished workflow to the user and turn aborts into errors
fn finish(outcome: Result<State>) -> Result<()> {
    match outcome {
        Ok(State::Applied(Applied::CheckedOut(branch))) => {
            success(&format!("Checkout current branch to {}", highlight(&branch)));
            Ok(())
        }
        Ok(State::Applied(Applied::Deleted(report))) => {
            report_deleted(&report);
            Ok(())
        }
        Ok(State::Aborted(AbortReason::Declined)) => {
            info("Nothing deleted.");
            Ok(())
        }
        Ok(State::Aborted(AbortReason::EmptySelection)) => {
            let err = BranchError::EmptySelection;
            info(&err.to_string());
            Err(err)
        }
        Ok(State::Aborted(AbortReason::Cancelled)) => Err(BranchError::Cancelled),
        Ok(state) => Err(anyhow!("Workflow stopped before finishing: {state:?}").into()),
        Err(BranchError::Delete(report)) => {
            report_deleted(&report);
            Err(BranchError::Delete(report))
        }
        Err(e) => Err(e),
    }
}

fn report_deleted(report: &DeleteReport) {
    if let Some(message) = deleted_message(report) {
        success(&message);
    }
}

fn deleted_message(report: &DeleteReport) -> Option<String> {
    let count = report.deleted.len();
    let noun = match count {
        0 => return None,
        1 => "branch has",
        _ => "branches have",
    };
    Some(format!("{} {noun} been deleted.", highlight(count)))
}
