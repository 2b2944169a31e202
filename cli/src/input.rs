//! Parsing of a single line typed at an operand prompt.

use modexp_core::MAX_INPUT_DIGITS;
use thiserror::Error;

/// Typing this at any prompt ends the program.
pub const QUIT_SENTINEL: &str = "-1";

/// A successfully parsed prompt line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Value(i64),
    Quit,
}

/// Reasons a prompt line is rejected before any operand check runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Entered input is invalid.\nTry again using a valid non-negative integer.")]
    Invalid,

    #[error(
        "Entered integer is too large.\nTry again using an integer with length no longer than {max_digits}."
    )]
    TooLong { max_digits: usize },

    #[error("Entered integer is negative.\nTry again using a valid non-negative integer.")]
    Negative,
}

/// Parses one raw prompt line. Bytes that are not UTF-8 are invalid input.
pub fn parse_line(line: &[u8]) -> Result<Input, InputError> {
    std::str::from_utf8(line)
        .map_err(|_| InputError::Invalid)
        .and_then(parse_input)
}

/// Parses one prompt line, ignoring surrounding whitespace.
pub fn parse_input(line: &str) -> Result<Input, InputError> {
    let line = line.trim();
    if line == QUIT_SENTINEL {
        return Ok(Input::Quit);
    }

    let (negative, digits) = match line.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, line),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InputError::Invalid);
    }
    if negative {
        return Err(InputError::Negative);
    }

    let too_long = InputError::TooLong {
        max_digits: MAX_INPUT_DIGITS,
    };
    if digits.len() > MAX_INPUT_DIGITS {
        return Err(too_long);
    }
    digits.parse().map(Input::Value).map_err(|_| too_long)
}
