//! Convenience re-exports of commonly used types.
//!
//! This module provides a convenient way to import all the commonly used
//! t9search types and traits with a single `use t9search::prelude::*;` statement.

pub use crate::contact::{Contact, ContactReader, ContactReaderOption};
pub use crate::engine::{
    exact::ExactEngine,
    factory::{ExactOrFuzzyEngineFactory, NeverEngine},
    fuzzy::{FuzzyEngine, FuzzyEngineBuilder},
    normalized::{NormalizedEngine, NormalizedEngineFactory},
};
pub use crate::options::{SearchOptions, SearchOptionsBuilder};
pub use crate::query::Query;
pub use crate::search::Searcher;
pub use crate::*;
