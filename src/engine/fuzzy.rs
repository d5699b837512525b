use std::fmt::{Display, Error, Formatter};

use crate::MatchEngine;
use crate::distance::adjusted_distance;

/// Whether `field` is at most `threshold` genuine edits away from `pattern`.
///
/// The distance is adjusted for the length gap, see
/// [`adjusted_distance`](crate::adjusted_distance).
pub fn within_threshold(field: &str, pattern: &str, threshold: usize) -> bool {
    if pattern.is_empty() {
        return true;
    }

    let threshold = i64::try_from(threshold).unwrap_or(i64::MAX);
    let distance = adjusted_distance(field, pattern);
    trace!("adjusted distance {distance} between {field:?} and {pattern:?}");
    threshold >= distance
}

//------------------------------------------------------------------------------
// Fuzzy engine
/// Builder for [`FuzzyEngine`]
#[derive(Default)]
pub struct FuzzyEngineBuilder {
    query: String,
    threshold: usize,
}

impl FuzzyEngineBuilder {
    /// Digits to look for
    pub fn query(mut self, query: &str) -> Self {
        self.query = query.to_string();
        self
    }

    /// Largest accepted adjusted distance
    pub fn threshold(mut self, threshold: usize) -> Self {
        self.threshold = threshold;
        self
    }

    /// Builds the engine
    pub fn build(self) -> FuzzyEngine {
        FuzzyEngine {
            query: self.query,
            threshold: self.threshold,
        }
    }
}

/// The fuzzy matching engine, bounded by an adjusted edit distance
pub struct FuzzyEngine {
    query: String,
    threshold: usize,
}

impl FuzzyEngine {
    /// Returns a default builder for chaining
    pub fn builder() -> FuzzyEngineBuilder {
        FuzzyEngineBuilder::default()
    }
}

impl MatchEngine for FuzzyEngine {
    fn match_field(&self, field: &str) -> bool {
        within_threshold(field, &self.query, self.threshold)
    }
}

impl Display for FuzzyEngine {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "(Fuzzy<={}: {})", self.threshold, self.query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_threshold_accepts_scattered_pattern() {
        assert!(within_threshold("228", "28", 0));
        assert!(within_threshold("603123456", "13", 0));
    }

    #[test]
    fn test_threshold_counts_substitutions() {
        assert!(!within_threshold("603123456", "19", 0));
        assert!(within_threshold("603123456", "19", 1));
        assert!(!within_threshold("603123456", "9999", 3));
        assert!(within_threshold("603123456", "9999", 4));
    }

    #[test]
    fn test_pattern_longer_than_field() {
        assert!(!within_threshold("2", "22", 1));
        assert!(within_threshold("2", "22", 2));
    }

    #[test]
    fn test_empty_pattern() {
        assert!(within_threshold("", "", 0));
        assert!(within_threshold("228", "", 0));
    }

    #[test]
    fn test_huge_threshold() {
        assert!(within_threshold("2", "99999999", usize::MAX));
    }

    #[test]
    fn test_engine() {
        let engine = FuzzyEngine::builder().query("686").threshold(1).build();
        assert!(engine.match_field("6686862"));
        assert!(engine.match_field("6*6"));
        assert!(!engine.match_field("2222"));
        assert_eq!(engine.to_string(), "(Fuzzy<=1: 686)");
    }
}
