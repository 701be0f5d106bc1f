//! Selection and confirmation state machine
//!
//! ```text
//! AwaitingChoice ──checkout──────────────────────────────▶ Applied
//!        │
//!        └─delete, ≥1 picked─▶ AwaitingConfirmation ─yes─▶ Applied
//!        │                              │
//!        └─cancel / nothing picked──────┴─no / cancel────▶ Aborted
//! ```
//!
//! The operator is only ever called on the transition into `Applied`, and in
//! delete mode that transition only leaves `AwaitingConfirmation`.

use colored::Colorize;
use tracing::debug;

use crate::error::{BranchError, Result};
use crate::git::{BranchStore, DeleteReport, Head, Inspector, Operator};
use crate::prompt::{Answer, Prompter};

pub const CHECKOUT_MESSAGE: &str = "Which branch do you want to checkout?";
pub const DELETE_MESSAGE: &str = "Which branches do you want to delete?";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Checkout,
    Delete,
}

/// Branch names picked for deletion; never empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection(Vec<String>);

impl Selection {
    /// `None` for an empty pick
    pub fn new(names: Vec<String>) -> Option<Self> {
        if names.is_empty() {
            None
        } else {
            Some(Self(names))
        }
    }

    pub fn names(&self) -> &[String] {
        &self.0
    }

    /// The question asked before deleting, naming every selected branch
    pub fn confirmation_message(&self) -> String {
        let count = self.0.len();
        let suffix = if count == 1 {
            "this branch?".to_string()
        } else {
            format!("those {} branches?", count.to_string().yellow().bold())
        };
        format!(
            "Are you sure you want to {} {suffix}\n  {}",
            "DELETE".yellow().bold(),
            self.0.join(", ")
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Applied {
    CheckedOut(String),
    Deleted(DeleteReport),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbortReason {
    /// The user backed out of a prompt
    Cancelled,
    /// Delete mode with nothing picked
    EmptySelection,
    /// The delete confirmation was answered "no"
    Declined,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum State {
    AwaitingChoice,
    AwaitingConfirmation(Selection),
    Applied(Applied),
    Aborted(AbortReason),
}

impl State {
    pub fn is_terminal(&self) -> bool {
        matches!(self, State::Applied(_) | State::Aborted(_))
    }
}

/// Repository facts gathered before any prompt is shown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prepared {
    pub head: Head,
    pub branches: Vec<String>,
}

/// Resolve HEAD and the actionable branches, failing before any prompt when
/// there is no repository or nothing but the current branch.
pub fn prepare<S: BranchStore>(inspector: &Inspector<'_, S>) -> Result<Prepared> {
    let head = inspector
        .check_repository()?
        .ok_or(BranchError::NoRepository)?;

    let branches = inspector.list_branches(&head)?;
    if branches.is_empty() {
        return Err(BranchError::NoOtherBranches);
    }

    Ok(Prepared { head, branches })
}

pub struct Workflow<'a, S: BranchStore, P: Prompter> {
    mode: Mode,
    branches: Vec<String>,
    operator: Operator<'a, S>,
    prompter: &'a mut P,
    state: State,
}

impl<'a, S: BranchStore, P: Prompter> Workflow<'a, S, P> {
    pub fn new(
        mode: Mode,
        branches: Vec<String>,
        operator: Operator<'a, S>,
        prompter: &'a mut P,
    ) -> Self {
        Self {
            mode,
            branches,
            operator,
            prompter,
            state: State::AwaitingChoice,
        }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    /// Perform one transition. Terminal states are left as they are.
    pub fn step(&mut self) -> Result<()> {
        let next = match (self.state.clone(), self.mode) {
            (State::Applied(_) | State::Aborted(_), _) => return Ok(()),
            (State::AwaitingChoice, Mode::Checkout) => self.choose_checkout()?,
            (State::AwaitingChoice, Mode::Delete) => self.choose_delete()?,
            (State::AwaitingConfirmation(selection), _) => self.confirm_delete(selection)?,
        };

        debug!(from = ?self.state, to = ?next, "workflow transition");
        self.state = next;
        Ok(())
    }

    /// Drive the machine to a terminal state
    pub fn run(mut self) -> Result<State> {
        while !self.state.is_terminal() {
            self.step()?;
        }
        Ok(self.state)
    }

    fn choose_checkout(&mut self) -> Result<State> {
        match self.prompter.select_one(CHECKOUT_MESSAGE, &self.branches)? {
            Answer::Cancelled => Ok(State::Aborted(AbortReason::Cancelled)),
            Answer::Value(branch) => {
                self.operator.checkout(&branch)?;
                Ok(State::Applied(Applied::CheckedOut(branch)))
            }
        }
    }

    fn choose_delete(&mut self) -> Result<State> {
        match self.prompter.select_many(DELETE_MESSAGE, &self.branches)? {
            Answer::Cancelled => Ok(State::Aborted(AbortReason::Cancelled)),
            Answer::Value(picked) => Ok(match Selection::new(picked) {
                Some(selection) => State::AwaitingConfirmation(selection),
                None => State::Aborted(AbortReason::EmptySelection),
            }),
        }
    }

    fn confirm_delete(&mut self, selection: Selection) -> Result<State> {
        match self.prompter.confirm(&selection.confirmation_message())? {
            Answer::Cancelled => Ok(State::Aborted(AbortReason::Cancelled)),
            Answer::Value(false) => Ok(State::Aborted(AbortReason::Declined)),
            Answer::Value(true) => {
                let report = self.operator.delete_branches(selection.names())?;
                Ok(State::Applied(Applied::Deleted(report)))
            }
        }
    }
}
