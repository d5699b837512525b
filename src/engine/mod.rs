pub mod exact;
pub mod factory;
pub mod fuzzy;
pub mod normalized;

use crate::engine::factory::ExactOrFuzzyEngineFactory;
use crate::engine::normalized::NormalizedEngineFactory;
use crate::query::Query;
use crate::{MatchEngineFactory, MatchMode};

/// Decides whether `field` matches the keypad `pattern`.
///
/// Both sides are normalized first, so `field` may be raw contact text or an
/// already normalized digit string. An empty pattern matches everything.
/// With a `threshold` the match is fuzzy and `mode` is ignored; without one
/// `mode` picks between a contiguous and a subsequence search.
///
/// ```
/// use t9search::{MatchMode, matches};
///
/// assert!(matches("228", "cat", MatchMode::Contiguous, None));
/// assert!(matches("28", "cat", MatchMode::Contiguous, None));
/// assert!(!matches("82", "cat", MatchMode::Contiguous, None));
/// assert!(matches("22", "cat", MatchMode::Subsequence, None));
/// assert!(matches("28", "cat", MatchMode::Contiguous, Some(0)));
/// ```
pub fn matches(pattern: &str, field: &str, mode: MatchMode, threshold: Option<usize>) -> bool {
    if pattern.is_empty() {
        return true;
    }

    let factory = NormalizedEngineFactory::new(ExactOrFuzzyEngineFactory::builder().mode(mode).threshold(threshold).build());
    factory
        .create_engine(&Query::Digits(pattern.to_string()))
        .match_field(field)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MODES: [MatchMode; 2] = [MatchMode::Contiguous, MatchMode::Subsequence];

    #[test]
    fn test_empty_pattern_is_wildcard() {
        for mode in MODES {
            for threshold in [None, Some(0), Some(3)] {
                assert!(matches("", "cat", mode, threshold));
                assert!(matches("", "", mode, threshold));
                assert!(matches("", "a b", mode, threshold));
            }
        }
    }

    #[test]
    fn test_contiguous() {
        // "cat" types 228
        assert!(matches("22", "cat", MatchMode::Contiguous, None));
        assert!(matches("28", "cat", MatchMode::Contiguous, None));
        assert!(!matches("222", "cat", MatchMode::Contiguous, None));
        assert!(!matches("82", "cat", MatchMode::Contiguous, None));
        assert!(matches("22", "aab", MatchMode::Contiguous, None));
        assert!(matches("38", "petr dvorak", MatchMode::Contiguous, None));
        assert!(matches("12", "603123456", MatchMode::Contiguous, None));
    }

    #[test]
    fn test_subsequence() {
        assert!(matches("28", "cat", MatchMode::Subsequence, None));
        assert!(!matches("28", "home", MatchMode::Subsequence, None));
        assert!(matches("46", "home", MatchMode::Subsequence, None));
        assert!(matches("463", "home", MatchMode::Subsequence, None));
    }

    #[test]
    fn test_fuzzy_ignores_mode() {
        for mode in MODES {
            assert!(matches("28", "cat", mode, Some(0)));
            assert!(!matches("99", "cat", mode, Some(1)));
            assert!(matches("99", "cat", mode, Some(2)));
        }
    }

    #[test]
    fn test_missing_threshold_is_exact() {
        assert!(!matches("82", "cat", MatchMode::Contiguous, None));
        assert!(matches("82", "cat", MatchMode::Contiguous, Some(1)));
    }

    #[test]
    fn test_unknown_characters_never_match_digits() {
        for digit in '0'..='9' {
            let pattern = digit.to_string();
            assert!(!matches(&pattern, " .-", MatchMode::Contiguous, None));
            assert!(!matches(&pattern, " .-", MatchMode::Subsequence, None));
        }
    }

    #[test]
    fn test_raw_pattern_is_normalized() {
        assert!(matches("cat", "bat", MatchMode::Contiguous, None));
        assert!(matches("ct", "bat", MatchMode::Subsequence, None));
    }

    #[test]
    fn test_accepts_normalized_fields() {
        assert!(matches("228", "228", MatchMode::Contiguous, None));
        assert!(matches("228", "bat", MatchMode::Contiguous, None));
    }
}
