//! Normalized match engine for matching on keypad digits.
//!
//! This engine wraps another engine and reduces each field to the keys that
//! type it before matching, so the inner engine only ever sees digit strings.

use std::fmt::{Display, Error, Formatter};

use crate::keypad::digit_of;
use crate::query::Query;
use crate::{MatchEngine, MatchEngineFactory};

/// Maps every character of `field` to the keypad key that produces it.
///
/// The result has exactly as many characters as `field`. Digit strings are
/// left unchanged, so normalizing twice is the same as normalizing once.
///
/// ```
/// use t9search::normalize;
///
/// assert_eq!(normalize("cat"), "228");
/// assert_eq!(normalize("+420 777"), "0420*777");
/// ```
pub fn normalize(field: &str) -> String {
    field.chars().map(digit_of).collect()
}

/// Engine that normalizes text before matching
pub struct NormalizedEngine {
    /// The underlying engine to match normalized text
    inner: Box<dyn MatchEngine>,
}

impl NormalizedEngine {
    /// Creates a new normalized match engine
    pub fn new(inner: Box<dyn MatchEngine>) -> Self {
        Self { inner }
    }
}

impl MatchEngine for NormalizedEngine {
    fn match_field(&self, field: &str) -> bool {
        self.inner.match_field(&normalize(field))
    }
}

impl Display for NormalizedEngine {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "(Normalized: {})", self.inner)
    }
}

//------------------------------------------------------------------------------
// NormalizedEngineFactory - wraps another factory and handles normalization

/// Factory that handles normalization by wrapping another engine factory
pub struct NormalizedEngineFactory {
    inner: Box<dyn MatchEngineFactory>,
}

impl NormalizedEngineFactory {
    /// Creates a new normalized engine factory
    pub fn new(inner: impl MatchEngineFactory + 'static) -> Self {
        Self { inner: Box::new(inner) }
    }
}

impl MatchEngineFactory for NormalizedEngineFactory {
    fn create_engine(&self, query: &Query) -> Box<dyn MatchEngine> {
        let normalized_query = match query {
            Query::Digits(digits) => Query::Digits(normalize(digits)),
            Query::Impossible => Query::Impossible,
        };

        let inner_engine = self.inner.create_engine(&normalized_query);
        Box::new(NormalizedEngine::new(inner_engine))
    }
}
