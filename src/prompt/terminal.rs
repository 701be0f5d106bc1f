//! Raw-mode terminal rendering of the prompts

use std::io::{self, Write};
use std::sync::Once;

use colored::Colorize;
use crossterm::cursor::{Hide, MoveToColumn, MoveUp, Show};
use crossterm::event::{self, Event};
use crossterm::terminal::{self, disable_raw_mode, enable_raw_mode, Clear, ClearType};
use crossterm::{execute, queue};

use crate::output::plain;

use super::keys::{ConfirmState, KeyOutcome, ListState};
use super::{Answer, Prompter};

static PANIC_HOOK_INSTALLED: Once = Once::new();

/// Restore the terminal before the default panic output runs
fn install_terminal_panic_hook() {
    PANIC_HOOK_INSTALLED.call_once(|| {
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), Show);
            default_hook(panic_info);
        }));
    });
}

/// Holds raw mode for the lifetime of one prompt
struct RawMode;

impl RawMode {
    fn enable() -> io::Result<Self> {
        enable_raw_mode()?;
        execute!(io::stdout(), Hide)?;
        Ok(RawMode)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), Show);
        let _ = disable_raw_mode();
    }
}

/// Prompts drawn on stdout, driven by crossterm key events
pub struct TerminalPrompter {
    page_size: usize,
}

impl TerminalPrompter {
    pub fn new(page_size: usize) -> Self {
        install_terminal_panic_hook();
        Self {
            page_size: page_size.max(1),
        }
    }

    fn run_list(
        &self,
        message: &str,
        hint: &str,
        choices: &[String],
        mut state: ListState,
    ) -> io::Result<Option<ListState>> {
        let _raw = RawMode::enable()?;
        let mut out = io::stdout();
        let mut drawn = 0;

        loop {
            drawn = redraw(&mut out, drawn, |lines| {
                lines.push(format!(
                    "{} {} {}",
                    "?".green(),
                    message.bold(),
                    hint.dimmed()
                ));
                for i in state.visible() {
                    let line = format!("{}{}", checkbox(&state, i), choices[i]);
                    if i == state.cursor() {
                        lines.push(format!("{} {}", "❯".cyan(), line.cyan()));
                    } else {
                        lines.push(format!("  {line}"));
                    }
                }
            })?;

            if let Event::Key(key) = event::read()? {
                match state.handle_key(key) {
                    KeyOutcome::Continue => {}
                    KeyOutcome::Submit => {
                        clear(&mut out, drawn)?;
                        return Ok(Some(state));
                    }
                    KeyOutcome::Cancel => {
                        clear(&mut out, drawn)?;
                        return Ok(None);
                    }
                }
            }
        }
    }
}

fn checkbox(state: &ListState, index: usize) -> String {
    if !state.is_multi() {
        return String::new();
    }
    if state.is_checked(index) {
        format!("{} ", "◉".green())
    } else {
        "◯ ".to_string()
    }
}

/// Erase the previous frame and draw a new one.
///
/// Returns the number of screen rows drawn, counting lines the terminal
/// wrapped, so the next `clear` moves back to the top of the frame.
fn redraw(
    out: &mut impl Write,
    previous: usize,
    build: impl FnOnce(&mut Vec<String>),
) -> io::Result<usize> {
    let mut lines = Vec::new();
    build(&mut lines);

    let width = terminal::size().map(|(cols, _)| cols as usize).unwrap_or(0);
    clear(out, previous)?;
    let mut rows = 0;
    for line in &lines {
        queue!(out, Clear(ClearType::CurrentLine))?;
        write!(out, "{line}\r\n")?;
        rows += rendered_rows(line, width);
    }
    out.flush()?;
    Ok(rows)
}

/// Screen rows a line occupies at `width` columns; 0 means unknown width
fn rendered_rows(line: &str, width: usize) -> usize {
    let chars = plain(line).chars().count();
    if width == 0 || chars == 0 {
        return 1;
    }
    chars.div_ceil(width)
}

fn clear(out: &mut impl Write, lines: usize) -> io::Result<()> {
    if lines > 0 {
        queue!(out, MoveUp(u16::try_from(lines).unwrap_or(u16::MAX)))?;
    }
    queue!(out, MoveToColumn(0), Clear(ClearType::FromCursorDown))?;
    out.flush()
}

/// Print the settled form of a prompt once it has been answered
fn settle(message: &str, answer: &str) -> io::Result<()> {
    let mut out = io::stdout();
    writeln!(out, "{} {} {}", "?".green(), message.bold(), answer.cyan())?;
    out.flush()
}

impl Prompter for TerminalPrompter {
    fn select_one(&mut self, message: &str, choices: &[String]) -> io::Result<Answer<String>> {
        let state = ListState::single(choices.len(), self.page_size);
        let Some(state) = self.run_list(message, "(use arrow keys)", choices, state)? else {
            return Ok(Answer::Cancelled);
        };

        let choice = choices[state.cursor()].clone();
        settle(message, &choice)?;
        Ok(Answer::Value(choice))
    }

    fn select_many(
        &mut self,
        message: &str,
        choices: &[String],
    ) -> io::Result<Answer<Vec<String>>> {
        let state = ListState::multi(choices.len(), self.page_size);
        let hint = "(space to select, a to toggle all, i to invert)";
        let Some(state) = self.run_list(message, hint, choices, state)? else {
            return Ok(Answer::Cancelled);
        };

        let picked: Vec<String> = state
            .checked()
            .into_iter()
            .map(|i| choices[i].clone())
            .collect();
        settle(message, &picked.join(", "))?;
        Ok(Answer::Value(picked))
    }

    fn confirm(&mut self, message: &str) -> io::Result<Answer<bool>> {
        let mut state = ConfirmState::new(false);
        let hint = if state.default_answer() { "(Y/n)" } else { "(y/N)" };

        let outcome = {
            let _raw = RawMode::enable()?;
            let mut out = io::stdout();
            let drawn = redraw(&mut out, 0, |lines| {
                let mut first = true;
                for part in message.lines() {
                    if first {
                        lines.push(format!(
                            "{} {} {}",
                            "?".green(),
                            part.bold(),
                            hint.dimmed()
                        ));
                        first = false;
                    } else {
                        lines.push(part.to_string());
                    }
                }
            })?;

            let outcome = loop {
                if let Event::Key(key) = event::read()? {
                    match state.handle_key(key) {
                        KeyOutcome::Continue => {}
                        done => break done,
                    }
                }
            };
            clear(&mut out, drawn)?;
            outcome
        };

        if outcome == KeyOutcome::Cancel {
            return Ok(Answer::Cancelled);
        }

        let first_line = message.lines().next().unwrap_or(message);
        settle(first_line, if state.answer() { "Yes" } else { "No" })?;
        Ok(Answer::Value(state.answer()))
    }
}
