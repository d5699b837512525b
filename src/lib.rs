//! t9search finds contacts by the phone keys that type them.
//!
//! Every character of a contact's name and phone number is reduced to its
//! keypad digit (`cat` becomes `228`), then compared against the digit
//! pattern as a contiguous run, as a subsequence, or fuzzily within an edit
//! distance. It can be used as a library or as the `t9search` command.
//!
//! # Examples
//!
//! ```
//! use t9search::prelude::*;
//!
//! let options = SearchOptionsBuilder::default()
//!     .pattern("686".to_string())
//!     .build()
//!     .unwrap();
//!
//! let input = "Petr Dvorak\n603123456\nJana Novotna\n777987654\n";
//! let contacts = ContactReader::default()
//!     .of_bufread(input.as_bytes())
//!     .collect::<Result<Vec<_>, _>>()
//!     .unwrap();
//!
//! let searcher = Searcher::from_options(&options).unwrap();
//! let found: Vec<String> = searcher.search(&contacts).map(|c| c.to_string()).collect();
//! assert_eq!(found, vec!["jana novotna, 777987654"]);
//! ```

#![warn(missing_docs)]

#[macro_use]
extern crate log;

use std::fmt::Display;

pub use crate::distance::{adjusted_distance, levenshtein};
pub use crate::engine::matches;
pub use crate::engine::normalized::normalize;
pub use crate::error::Error;
pub use crate::options::SearchOptions;

pub mod contact;
mod distance;
mod engine;
pub mod error;
pub mod keypad;
pub mod options;
pub mod prelude;
pub mod query;
pub mod search;

//==============================================================================
// A match engine will execute the matching algorithm

#[derive(Eq, PartialEq, Debug, Copy, Clone, Default)]
/// How the digits of an exact pattern must appear in a field
pub enum MatchMode {
    /// The pattern is an unbroken run of the field
    #[default]
    Contiguous,
    /// The pattern's digits appear in order, other keys may sit between them
    Subsequence,
}

/// A matching engine that decides whether fields match a query
pub trait MatchEngine: Sync + Send + Display {
    /// Matches a single field against the query
    fn match_field(&self, field: &str) -> bool;
}

/// Factory for creating match engines
pub trait MatchEngineFactory {
    /// Creates a match engine for `query`
    fn create_engine(&self, query: &query::Query) -> Box<dyn MatchEngine>;
}
