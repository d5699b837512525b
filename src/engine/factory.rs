use std::fmt::{Display, Error, Formatter};

use crate::engine::exact::ExactEngine;
use crate::engine::fuzzy::FuzzyEngine;
use crate::query::Query;
use crate::{MatchEngine, MatchEngineFactory, MatchMode};

//------------------------------------------------------------------------------
/// Engine for a query that cannot match anything
pub struct NeverEngine;

impl MatchEngine for NeverEngine {
    fn match_field(&self, _field: &str) -> bool {
        false
    }
}

impl Display for NeverEngine {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "(Never)")
    }
}

//------------------------------------------------------------------------------
/// Picks the exact engine or, when a threshold is set, the fuzzy one
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactOrFuzzyEngineFactory {
    mode: MatchMode,
    threshold: Option<usize>,
}

impl ExactOrFuzzyEngineFactory {
    /// Returns a default builder for chaining
    pub fn builder() -> Self {
        Self::default()
    }

    /// Search mode used when matching exactly
    pub fn mode(mut self, mode: MatchMode) -> Self {
        self.mode = mode;
        self
    }

    /// Switches to fuzzy matching when `Some`
    pub fn threshold(mut self, threshold: Option<usize>) -> Self {
        self.threshold = threshold;
        self
    }

    /// Finishes the builder
    pub fn build(self) -> Self {
        self
    }
}

impl MatchEngineFactory for ExactOrFuzzyEngineFactory {
    fn create_engine(&self, query: &Query) -> Box<dyn MatchEngine> {
        let digits = match query {
            Query::Digits(digits) => digits,
            Query::Impossible => return Box::new(NeverEngine),
        };

        match self.threshold {
            Some(threshold) => {
                if self.mode == MatchMode::Subsequence {
                    debug!("fuzzy matching ignores the subsequence mode");
                }
                Box::new(FuzzyEngine::builder().query(digits).threshold(threshold).build())
            }
            None => Box::new(ExactEngine::builder(digits).mode(self.mode).build()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::normalized::NormalizedEngineFactory;

    fn digits(s: &str) -> Query {
        Query::Digits(s.to_string())
    }

    #[test]
    fn test_picks_engine() {
        let exact = ExactOrFuzzyEngineFactory::builder().build();
        assert_eq!(exact.create_engine(&digits("22")).to_string(), "(Exact|22)");

        let subsequence = ExactOrFuzzyEngineFactory::builder()
            .mode(MatchMode::Subsequence)
            .build();
        assert_eq!(subsequence.create_engine(&digits("22")).to_string(), "(Subsequence|22)");

        let fuzzy = ExactOrFuzzyEngineFactory::builder()
            .mode(MatchMode::Subsequence)
            .threshold(Some(2))
            .build();
        assert_eq!(fuzzy.create_engine(&digits("22")).to_string(), "(Fuzzy<=2: 22)");
    }

    #[test]
    fn test_impossible_query_never_matches() {
        let factory = ExactOrFuzzyEngineFactory::builder().threshold(Some(usize::MAX)).build();
        let engine = factory.create_engine(&Query::Impossible);
        assert_eq!(engine.to_string(), "(Never)");
        assert!(!engine.match_field(""));
        assert!(!engine.match_field("228"));
    }

    #[test]
    fn test_normalized_factory() {
        let factory = NormalizedEngineFactory::new(ExactOrFuzzyEngineFactory::builder().build());
        let engine = factory.create_engine(&digits("228"));
        assert_eq!(engine.to_string(), "(Normalized: (Exact|228))");
        assert!(engine.match_field("bat"));
        assert!(engine.match_field("acta"));
        assert!(!engine.match_field("dog"));
    }
}
