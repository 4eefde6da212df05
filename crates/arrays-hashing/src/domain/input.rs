//! Command-line input parsing
//!
//! Solutions themselves never fail; this is the only fallible surface of the crate.

use thiserror::Error;

/// Input parsing errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// A token could not be parsed as an integer
    #[error("Invalid integer: '{token}'")]
    InvalidInteger { token: String },
    /// No values were supplied where at least one was required
    #[error("Empty input")]
    EmptyInput,
    /// Strategy name not known for this problem
    #[error("Unknown {problem} strategy: '{name}' (expected one of: {expected})")]
    UnknownStrategy {
        problem: &'static str,
        name: String,
        expected: String,
    },
}

/// Parse a single integer, tolerating surrounding whitespace
pub fn parse_int(token: &str) -> Result<i64, InputError> {
    let trimmed = token.trim();
    trimmed.parse().map_err(|_| InputError::InvalidInteger {
        token: trimmed.to_string(),
    })
}

/// Parse a list of integers
///
/// Accepts comma and/or whitespace separators, with optional surrounding
/// brackets: `2,7,11,15`, `"2 7 11 15"` and `[2, 7, 11, 15]` are equivalent.
/// `[]` parses to an empty list; a blank string is [`InputError::EmptyInput`].
pub fn parse_int_list(input: &str) -> Result<Vec<i64>, InputError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(InputError::EmptyInput);
    }

    let body = trimmed
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .unwrap_or(trimmed);

    body.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(parse_int)
        .collect()
}

/// Build the error for an unrecognised strategy name
pub(crate) fn unknown_strategy(problem: &'static str, name: &str, names: &[&str]) -> InputError {
    InputError::UnknownStrategy {
        problem,
        name: name.to_string(),
        expected: names.join(", "),
    }
}
