//! Message prefixes for user-facing output

use colored::{ColoredString, Colorize};

pub fn info_prefix() -> ColoredString {
    "info".blue().bold()
}

pub fn success_prefix() -> ColoredString {
    "success".green().bold()
}

pub fn error_prefix() -> ColoredString {
    "error".red().bold()
}

pub fn info(message: &str) {
    println!("{} {message}", info_prefix());
}

pub fn success(message: &str) {
    println!("{} {message}", success_prefix());
}

pub fn error(message: &str) {
    eprintln!("{} {message}", error_prefix());
}

/// Highlight a branch name or count inside a message
pub fn highlight(text: impl std::fmt::Display) -> ColoredString {
    text.to_string().magenta()
}

/// Text as it appears on screen, with ANSI escape sequences removed
pub fn plain(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\x1b' {
            out.push(c);
            continue;
        }
        if chars.next_if_eq(&'[').is_some() {
            // parameters run until the final byte in `@..=~`
            for c in chars.by_ref() {
                if ('@'..='~').contains(&c) {
                    break;
                }
            }
        }
    }
    out
}
