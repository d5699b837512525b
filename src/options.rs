//! Configuration options for t9search.
//!
//! This module provides the `SearchOptions` struct and builder that select
//! the pattern, the matching mode and the input limits.

use derive_builder::Builder;

use crate::MatchMode;
use crate::contact::MAX_LINE_LENGTH;
use crate::query::MAX_PATTERN_LENGTH;

#[cfg(feature = "cli")]
/// Custom value parser that only lets keypad digits through
fn parse_pattern(s: &str) -> Result<String, String> {
    crate::query::Query::parse(s, usize::MAX)
        .map(|_| s.to_string())
        .map_err(|e| e.to_string())
}

/// t9search - look up contacts by phone keypad digits
///
/// Reads contacts from stdin, a name line followed by a phone number line,
/// and prints the contacts whose name or number can be typed with PATTERN.
#[derive(Builder, Debug, Clone, PartialEq, Eq)]
#[builder(default)]
#[cfg_attr(feature = "cli", derive(clap::Parser))]
#[cfg_attr(
    feature = "cli",
    command(name = "t9search", args_override_self = true, verbatim_doc_comment, version, about)
)]
pub struct SearchOptions {
    /// Match the pattern as a subsequence
    ///
    /// The digits must appear in order but may be separated by other keys.
    #[cfg_attr(feature = "cli", arg(short, long, help_heading = "Search"))]
    pub subsequence: bool,

    /// Fuzzy matching with at most L errors
    ///
    /// Errors are edits beyond the ones needed to trim the contact down to the
    /// pattern's length. Overrides --subsequence.
    #[cfg_attr(
        feature = "cli",
        arg(short = 'l', long = "levenshtein", value_name = "L", help_heading = "Search")
    )]
    pub threshold: Option<usize>,

    /// Longest usable pattern
    ///
    /// Longer patterns are accepted but match nothing.
    #[cfg_attr(
        feature = "cli",
        arg(long, default_value_t = MAX_PATTERN_LENGTH, value_name = "N", help_heading = "Limits")
    )]
    pub max_pattern_length: usize,

    /// Longest accepted input line
    ///
    /// Longer lines abort the search.
    #[cfg_attr(
        feature = "cli",
        arg(long, default_value_t = MAX_LINE_LENGTH, value_name = "N", help_heading = "Limits")
    )]
    pub max_line_length: usize,

    /// Keypad digits to look for, all contacts match when omitted
    #[cfg_attr(feature = "cli", arg(default_value = "", value_parser = parse_pattern))]
    pub pattern: String,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            subsequence: false,
            threshold: None,
            max_pattern_length: MAX_PATTERN_LENGTH,
            max_line_length: MAX_LINE_LENGTH,
            pattern: String::new(),
        }
    }
}

impl SearchOptions {
    /// The exact matching mode selected by the flags
    pub fn mode(&self) -> MatchMode {
        if self.subsequence {
            MatchMode::Subsequence
        } else {
            MatchMode::Contiguous
        }
    }
}
