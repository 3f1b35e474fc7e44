//! Type-safe location identifier.
//!
//! [`LocationId`] wraps the database-generated integer primary key so it
//! cannot be confused with page numbers, offsets, or other integers that
//! flow through the same handlers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Primary key of a [`super::Location`] row.
///
/// Generated by the database on insert and immutable thereafter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationId(i64);

impl LocationId {
    /// Wraps a raw primary key value.
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Returns the raw primary key value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Failure to parse a [`LocationId`] from a path segment.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid location id {0:?}: expected a positive integer")]
pub struct ParseLocationIdError(String);

impl FromStr for LocationId {
    type Err = ParseLocationIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<i64>() {
            Ok(raw) if raw > 0 => Ok(Self(raw)),
            _ => Err(ParseLocationIdError(s.to_string())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn parses_positive_integers() {
        let Ok(id) = "42".parse::<LocationId>() else {
            panic!("expected valid id");
        };
        assert_eq!(id.get(), 42);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn rejects_zero_negative_and_text() {
        assert!("0".parse::<LocationId>().is_err());
        assert!("-3".parse::<LocationId>().is_err());
        assert!("abc".parse::<LocationId>().is_err());
        assert!("".parse::<LocationId>().is_err());
        assert!("12abc".parse::<LocationId>().is_err());
    }

    #[test]
    fn error_message_names_the_input() {
        let Err(err) = "nope".parse::<LocationId>() else {
            panic!("expected parse failure");
        };
        assert!(err.to_string().contains("\"nope\""));
    }

    #[test]
    fn serializes_as_bare_integer() {
        let json = serde_json::to_string(&LocationId::new(7)).ok();
        assert_eq!(json.as_deref(), Some("7"));
    }
}
