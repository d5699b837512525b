use std::fmt::{Display, Error, Formatter};

use memchr::memmem;

use crate::{MatchEngine, MatchMode};

/// Whether `pattern` occurs in `field` as one unbroken run.
pub fn contains(field: &str, pattern: &str) -> bool {
    memmem::find(field.as_bytes(), pattern.as_bytes()).is_some()
}

/// Whether every character of `pattern` appears in `field` in order,
/// gaps allowed.
pub fn is_subsequence(field: &str, pattern: &str) -> bool {
    let mut wanted = pattern.chars().peekable();
    for ch in field.chars() {
        match wanted.peek() {
            Some(&next) if next == ch => {
                wanted.next();
            }
            Some(_) => {}
            None => break,
        }
    }
    wanted.peek().is_none()
}

//------------------------------------------------------------------------------
// Exact engine
/// Engine matching a query exactly, as a run or as a subsequence
#[derive(Debug)]
pub struct ExactEngine {
    query: String,
    mode: MatchMode,
}

impl ExactEngine {
    /// Starts an engine for `query`, contiguous by default
    pub fn builder(query: &str) -> Self {
        ExactEngine {
            query: query.to_string(),
            mode: MatchMode::default(),
        }
    }

    /// Sets the search mode
    pub fn mode(mut self, mode: MatchMode) -> Self {
        self.mode = mode;
        self
    }

    /// Finishes the builder
    pub fn build(self) -> Self {
        self
    }
}

impl MatchEngine for ExactEngine {
    fn match_field(&self, field: &str) -> bool {
        if self.query.is_empty() {
            return true;
        }

        match self.mode {
            MatchMode::Contiguous => contains(field, &self.query),
            MatchMode::Subsequence => is_subsequence(field, &self.query),
        }
    }
}

impl Display for ExactEngine {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        match self.mode {
            MatchMode::Contiguous => write!(f, "(Exact|{})", self.query),
            MatchMode::Subsequence => write!(f, "(Subsequence|{})", self.query),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains() {
        assert!(contains("222", "22"));
        assert!(contains("228", "228"));
        assert!(contains("603123456", "12"));
        assert!(!contains("228", "222"));
        assert!(!contains("228", "282"));
        assert!(!contains("2", "22"));
    }

    #[test]
    fn test_is_subsequence() {
        assert!(is_subsequence("228", "28"));
        assert!(is_subsequence("541141120", "111"));
        assert!(is_subsequence("9299999922", "222"));
        assert!(!is_subsequence("9999922399", "222"));
        assert!(!is_subsequence("4663", "28"));
        assert!(is_subsequence("4663", "46"));
    }

    #[test]
    fn test_subsequence_does_not_reuse_characters() {
        assert!(!is_subsequence("2", "22"));
        assert!(is_subsequence("2*2", "22"));
        assert!(!is_subsequence("28", "82"));
    }

    #[test]
    fn test_empty_query_matches_everything() {
        for mode in [MatchMode::Contiguous, MatchMode::Subsequence] {
            let engine = ExactEngine::builder("").mode(mode).build();
            assert!(engine.match_field("228"));
            assert!(engine.match_field(""));
        }
    }

    #[test]
    fn test_engine_modes() {
        let contiguous = ExactEngine::builder("28").build();
        assert!(!contiguous.match_field("2*8"));
        assert!(contiguous.match_field("228"));

        let subsequence = ExactEngine::builder("28").mode(MatchMode::Subsequence).build();
        assert!(subsequence.match_field("2*8"));
        assert!(!subsequence.match_field("82"));
    }

    #[test]
    fn test_display() {
        assert_eq!(ExactEngine::builder("228").build().to_string(), "(Exact|228)");
        assert_eq!(
            ExactEngine::builder("2").mode(MatchMode::Subsequence).build().to_string(),
            "(Subsequence|2)"
        );
    }
}
