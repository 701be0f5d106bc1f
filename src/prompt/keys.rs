//! Key handling for the list and confirm prompts, kept free of terminal I/O

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press did to a prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Continue,
    Submit,
    Cancel,
}

fn is_cancel(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => true,
        KeyCode::Char('c') | KeyCode::Char('d') => {
            key.modifiers.contains(KeyModifiers::CONTROL)
        }
        _ => false,
    }
}

/// Cursor, scroll window and check marks of a list prompt
#[derive(Debug, Clone)]
pub struct ListState {
    cursor: usize,
    offset: usize,
    page_size: usize,
    checked: Vec<bool>,
    multi: bool,
}

impl ListState {
    pub fn single(len: usize, page_size: usize) -> Self {
        Self::new(len, page_size, false)
    }

    pub fn multi(len: usize, page_size: usize) -> Self {
        Self::new(len, page_size, true)
    }

    fn new(len: usize, page_size: usize, multi: bool) -> Self {
        Self {
            cursor: 0,
            offset: 0,
            page_size: page_size.max(1),
            checked: vec![false; len],
            multi,
        }
    }

    pub fn is_multi(&self) -> bool {
        self.multi
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_checked(&self, index: usize) -> bool {
        self.checked.get(index).copied().unwrap_or(false)
    }

    /// Indices of checked items in listing order
    pub fn checked(&self) -> Vec<usize> {
        self.checked
            .iter()
            .enumerate()
            .filter_map(|(i, c)| c.then_some(i))
            .collect()
    }

    /// Item indices currently on screen
    pub fn visible(&self) -> std::ops::Range<usize> {
        let end = (self.offset + self.page_size).min(self.checked.len());
        self.offset..end
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> KeyOutcome {
        if key.kind == KeyEventKind::Release {
            return KeyOutcome::Continue;
        }
        if is_cancel(&key) {
            return KeyOutcome::Cancel;
        }

        let len = self.checked.len();
        match key.code {
            KeyCode::Enter if len > 0 || self.multi => return KeyOutcome::Submit,
            KeyCode::Up | KeyCode::Char('k') if len > 0 => {
                self.cursor = if self.cursor == 0 {
                    len - 1
                } else {
                    self.cursor - 1
                };
            }
            KeyCode::Down | KeyCode::Char('j') if len > 0 => {
                self.cursor = (self.cursor + 1) % len;
            }
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = len.saturating_sub(1),
            KeyCode::Char(' ') if self.multi && len > 0 => {
                self.checked[self.cursor] = !self.checked[self.cursor];
            }
            KeyCode::Char('a') if self.multi => {
                let all = self.checked.iter().all(|c| *c);
                self.checked.iter_mut().for_each(|c| *c = !all);
            }
            KeyCode::Char('i') if self.multi => {
                self.checked.iter_mut().for_each(|c| *c = !*c);
            }
            _ => {}
        }

        self.scroll_to_cursor();
        KeyOutcome::Continue
    }

    fn scroll_to_cursor(&mut self) {
        if self.cursor < self.offset {
            self.offset = self.cursor;
        } else if self.cursor >= self.offset + self.page_size {
            self.offset = self.cursor + 1 - self.page_size;
        }
    }
}

/// A yes/no prompt; Enter takes the default
#[derive(Debug, Clone, Copy)]
pub struct ConfirmState {
    default: bool,
    answer: Option<bool>,
}

impl ConfirmState {
    pub fn new(default: bool) -> Self {
        Self {
            default,
            answer: None,
        }
    }

    pub fn default_answer(&self) -> bool {
        self.default
    }

    /// The answer once submitted
    pub fn answer(&self) -> bool {
        self.answer.unwrap_or(self.default)
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> KeyOutcome {
        if key.kind == KeyEventKind::Release {
            return KeyOutcome::Continue;
        }
        if is_cancel(&key) {
            return KeyOutcome::Cancel;
        }

        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                self.answer = Some(true);
                KeyOutcome::Submit
            }
            KeyCode::Char('n') | KeyCode::Char('N') => {
                self.answer = Some(false);
                KeyOutcome::Submit
            }
            KeyCode::Enter => KeyOutcome::Submit,
            _ => KeyOutcome::Continue,
        }
    }
}
