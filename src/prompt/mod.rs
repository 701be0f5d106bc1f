//! Interactive prompts
//!
//! The workflow only talks to the [`Prompter`] trait. Cancellation is part of
//! every answer, so callers must handle it at each prompt instead of relying
//! on a process-wide key listener.

mod keys;
mod terminal;

use std::io;

pub use keys::{ConfirmState, KeyOutcome, ListState};
pub use terminal::TerminalPrompter;

/// A prompt answer, or the user backing out
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer<T> {
    Value(T),
    Cancelled,
}

pub trait Prompter {
    /// Pick exactly one of `choices`
    fn select_one(&mut self, message: &str, choices: &[String]) -> io::Result<Answer<String>>;

    /// Pick any subset of `choices`, returned in listing order; may be empty
    fn select_many(
        &mut self,
        message: &str,
        choices: &[String],
    ) -> io::Result<Answer<Vec<String>>>;

    /// Yes or no
    fn confirm(&mut self, message: &str) -> io::Result<Answer<bool>>;
}
