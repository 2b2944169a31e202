//! Terminal colors for feedback messages.

use std::fmt;

const RESET: &str = "\x1b[0m";
const BOLD_RED: &str = "\x1b[1m\x1b[31m";
const BOLD_GREEN: &str = "\x1b[1m\x1b[32m";

/// Decides whether output is wrapped in ANSI color codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub const PLAIN: Self = Self { enabled: false };

    pub const fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn error<T: fmt::Display>(&self, text: T) -> Painted<T> {
        self.paint(BOLD_RED, text)
    }

    pub fn success<T: fmt::Display>(&self, text: T) -> Painted<T> {
        self.paint(BOLD_GREEN, text)
    }

    fn paint<T: fmt::Display>(&self, color: &'static str, text: T) -> Painted<T> {
        Painted {
            color: self.enabled.then_some(color),
            text,
        }
    }
}

/// Text that prints with its color codes, if any.
#[derive(Debug, Clone, Copy)]
pub struct Painted<T> {
    color: Option<&'static str>,
    text: T,
}

impl<T: fmt::Display> fmt::Display for Painted<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.color {
            Some(color) => write!(f, "{color}{}{RESET}", self.text),
            None => write!(f, "{}", self.text),
        }
    }
}
