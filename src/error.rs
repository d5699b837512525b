//! Errors raised while preparing a search.
//!
//! Matching itself never fails; these come from reading contacts and
//! validating the pattern.

use thiserror::Error;

/// Errors reported by [`ContactReader`](crate::contact::ContactReader) and
/// [`Query::parse`](crate::query::Query::parse).
#[derive(Debug, Error)]
pub enum Error {
    /// The contact source could not be read
    #[error("failed to read contacts")]
    Io(#[from] std::io::Error),

    /// An input line exceeds the configured length limit
    #[error("line {line} is too long ({len} characters, at most {max} allowed)")]
    LineTooLong {
        /// 1-based line number
        line: usize,
        /// Length of the line in characters
        len: usize,
        /// Configured limit
        max: usize,
    },

    /// An input line is blank
    #[error("line {line} is empty")]
    EmptyLine {
        /// 1-based line number
        line: usize,
    },

    /// The input ended right after a name
    #[error("contact {name:?} on line {line} has no phone number")]
    MissingPhoneNumber {
        /// 1-based line number of the name
        line: usize,
        /// The dangling name
        name: String,
    },

    /// The pattern contains something other than keypad digits
    #[error("invalid character {ch:?} at position {position} of the pattern, only digits are allowed")]
    InvalidPattern {
        /// Offending character
        ch: char,
        /// 0-based character position
        position: usize,
    },
}
