use crate::error::Error;

/// Default limit on the pattern length, in characters.
pub const MAX_PATTERN_LENGTH: usize = 100;

/// A validated keypad pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// Keys to look for. Empty matches every contact.
    Digits(String),
    /// Stands in for a pattern too long to ever match a contact.
    Impossible,
}

impl Query {
    /// Validates `raw` as a pattern of at most `max_len` digits.
    ///
    /// Non-digit characters are an error. An oversized pattern is not: it is
    /// replaced by [`Query::Impossible`].
    ///
    /// ```
    /// use t9search::query::Query;
    ///
    /// assert_eq!(Query::parse("686", 100).unwrap(), Query::Digits("686".into()));
    /// assert_eq!(Query::parse("686", 2).unwrap(), Query::Impossible);
    /// assert!(Query::parse("6a6", 100).is_err());
    /// ```
    pub fn parse(raw: &str, max_len: usize) -> Result<Self, Error> {
        if let Some((position, ch)) = raw.chars().enumerate().find(|(_, ch)| !ch.is_ascii_digit()) {
            return Err(Error::InvalidPattern { ch, position });
        }

        if raw.len() > max_len {
            warn!(
                "pattern is {} digits long, more than the {max_len} allowed; nothing will match",
                raw.len()
            );
            return Ok(Query::Impossible);
        }

        Ok(Query::Digits(raw.to_string()))
    }

    /// Whether the query matches every contact
    pub fn is_wildcard(&self) -> bool {
        matches!(self, Query::Digits(digits) if digits.is_empty())
    }
}

impl Default for Query {
    fn default() -> Self {
        Query::Digits(String::new())
    }
}
