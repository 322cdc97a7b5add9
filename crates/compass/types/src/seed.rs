//! Question-set seeds.
//!
//! A seed arrives either as an integer or as free text. Text that parses
//! as an integer is treated as that integer; any other text is reduced to
//! 64 bits with BLAKE3 so the same string always selects the same
//! sequence.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{AssessmentError, CompassResult};

/// The key a question set is derived from.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Seed {
    Numeric(u64),
    Text(String),
}

impl Seed {
    /// Parse a caller-supplied seed.
    pub fn parse(raw: &str) -> CompassResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(AssessmentError::InvalidSeed("seed is empty".into()));
        }
        Ok(match trimmed.parse::<u64>() {
            Ok(n) => Seed::Numeric(n),
            Err(_) => Seed::Text(trimmed.to_string()),
        })
    }

    /// Seed taken from the wall clock, for respondents who supply none.
    pub fn generate() -> Self {
        Seed::Numeric(Utc::now().timestamp_millis().max(0) as u64)
    }

    /// Reject seeds no question set can be derived from.
    pub fn validate(&self) -> CompassResult<()> {
        match self {
            Seed::Text(s) if s.trim().is_empty() => {
                Err(AssessmentError::InvalidSeed("seed is empty".into()))
            }
            _ => Ok(()),
        }
    }

    /// The 64-bit value used to key random number generators.
    pub fn value(&self) -> u64 {
        match self {
            Seed::Numeric(n) => *n,
            Seed::Text(s) => {
                let hash = blake3::hash(s.as_bytes());
                let mut bytes = [0u8; 8];
                bytes.copy_from_slice(&hash.as_bytes()[..8]);
                u64::from_le_bytes(bytes)
            }
        }
    }
}

impl From<u64> for Seed {
    fn from(n: u64) -> Self {
        Seed::Numeric(n)
    }
}

impl FromStr for Seed {
    type Err = AssessmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Seed::parse(s)
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seed::Numeric(n) => write!(f, "{n}"),
            Seed::Text(s) => write!(f, "{s}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_text_is_numeric() {
        assert_eq!(Seed::parse(" 1700000000000 ").unwrap(), Seed::Numeric(1_700_000_000_000));
    }

    #[test]
    fn test_text_seed_is_stable() {
        let a = Seed::parse("team-offsite").unwrap();
        let b = Seed::parse("team-offsite").unwrap();
        assert_eq!(a.value(), b.value());
        assert_ne!(a.value(), Seed::parse("team-offsite-2").unwrap().value());
    }

    #[test]
    fn test_empty_seed_rejected() {
        assert!(matches!(Seed::parse("   "), Err(AssessmentError::InvalidSeed(_))));
        assert!(Seed::Text(String::new()).validate().is_err());
        assert!(Seed::Numeric(0).validate().is_ok());
    }

    #[test]
    fn test_seed_serde_untagged() {
        let n: Seed = serde_json::from_str("42").unwrap();
        assert_eq!(n, Seed::Numeric(42));
        let t: Seed = serde_json::from_str("\"abc\"").unwrap();
        assert_eq!(t, Seed::Text("abc".into()));
    }
}
