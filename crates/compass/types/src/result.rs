//! Scored assessment outcomes.
//!
//! An [`AssessmentResult`] is a pure function of the answers and the
//! scoring policy. It carries no timestamps or identifiers, so scoring
//! the same stored answers twice produces identical values.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::answer::Answer;
use crate::axis::{Axis, PerAxis, Pole};
use crate::error::AssessmentError;

/// Overall confidence shown when no per-axis percentages are available.
pub const FALLBACK_OVERALL_CONFIDENCE: f64 = 75.0;

// ── Type Code ────────────────────────────────────────────────────────

/// Four dominant poles in axis order, e.g. `ENTJ`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct TypeCode(pub [Pole; 4]);

impl TypeCode {
    /// Build a code from one pole per axis.
    pub fn from_poles(poles: PerAxis<Pole>) -> Self {
        Self([poles.ei, poles.sn, poles.tf, poles.jp])
    }

    pub fn pole(&self, axis: Axis) -> Pole {
        self.0[axis.index()]
    }
}

impl fmt::Display for TypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for pole in self.0 {
            write!(f, "{pole}")?;
        }
        Ok(())
    }
}

impl FromStr for TypeCode {
    type Err = AssessmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AssessmentError::InvalidTypeCode(s.to_string());
        let chars: Vec<char> = s.trim().chars().collect();
        if chars.len() != 4 {
            return Err(invalid());
        }
        let mut poles = [Pole::E; 4];
        for (axis, c) in Axis::ALL.into_iter().zip(chars) {
            let pole = Pole::from_char(c).ok_or_else(invalid)?;
            if pole.axis() != axis {
                return Err(invalid());
            }
            poles[axis.index()] = pole;
        }
        Ok(Self(poles))
    }
}

impl From<TypeCode> for String {
    fn from(code: TypeCode) -> Self {
        code.to_string()
    }
}

impl TryFrom<String> for TypeCode {
    type Error = AssessmentError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

// ── Confidence ───────────────────────────────────────────────────────

/// Categorical confidence derived from an axis margin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLabel {
    Low,
    Medium,
    High,
}

impl fmt::Display for ConfidenceLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfidenceLabel::Low => write!(f, "low"),
            ConfidenceLabel::Medium => write!(f, "medium"),
            ConfidenceLabel::High => write!(f, "high"),
        }
    }
}

/// Single-number confidence for a whole result.
///
/// `Computed` values come from the four axis margins. `Fallback` is a
/// display placeholder for records without percentages and must never
/// be treated as a measurement.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum OverallConfidence {
    Computed { value: f64 },
    Fallback,
}

impl OverallConfidence {
    /// Percentage to display (50.0-100.0 when computed).
    pub fn value(&self) -> f64 {
        match self {
            OverallConfidence::Computed { value } => *value,
            OverallConfidence::Fallback => FALLBACK_OVERALL_CONFIDENCE,
        }
    }

    pub fn is_computed(&self) -> bool {
        matches!(self, OverallConfidence::Computed { .. })
    }

    /// Whole-number percentage for display.
    pub fn display_percent(&self) -> u32 {
        self.value().round() as u32
    }
}

// ── Axis Score ───────────────────────────────────────────────────────

/// Scored outcome for one axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisScore {
    pub axis: Axis,
    /// Answers selecting the first-listed pole
    pub first_count: u32,
    /// Answers selecting the second-listed pole
    pub second_count: u32,
    /// Percentage for the first-listed pole
    pub first_percent: u32,
    /// Percentage for the second-listed pole; always `100 - first_percent`
    pub second_percent: u32,
    /// Pole with the greater count, or the tie-break pole on a tie
    pub dominant: Pole,
    /// `|first_percent - second_percent|`
    pub margin: u32,
    pub label: ConfidenceLabel,
}

impl AxisScore {
    /// Percentage for either pole of this axis.
    pub fn percent_of(&self, pole: Pole) -> Option<u32> {
        if pole == self.axis.first() {
            Some(self.first_percent)
        } else if pole == self.axis.second() {
            Some(self.second_percent)
        } else {
            None
        }
    }

    /// Whether the split was an exact tie decided by policy.
    pub fn is_tie(&self) -> bool {
        self.first_count == self.second_count
    }
}

// ── Assessment Result ────────────────────────────────────────────────

/// The scored outcome of a completed assessment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub type_code: TypeCode,
    pub axes: PerAxis<AxisScore>,
    pub overall: OverallConfidence,
    /// Ordered answers the result was computed from, kept for audit
    pub answers: Vec<Answer>,
}

impl AssessmentResult {
    pub fn axis(&self, axis: Axis) -> &AxisScore {
        self.axes.get(axis)
    }

    /// Percentage for a pole.
    pub fn percent_of(&self, pole: Pole) -> u32 {
        let score = self.axes.get(pole.axis());
        if pole.is_first() {
            score.first_percent
        } else {
            score.second_percent
        }
    }

    /// Confidence label and margin for an axis.
    pub fn confidence(&self, axis: Axis) -> (ConfidenceLabel, u32) {
        let score = self.axes.get(axis);
        (score.label, score.margin)
    }

    pub fn margins(&self) -> PerAxis<u32> {
        self.axes.map(|_, score| score.margin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_code_roundtrip_text() {
        let code: TypeCode = "entj".parse().unwrap();
        assert_eq!(code.to_string(), "ENTJ");
        assert_eq!(code.pole(Axis::TF), Pole::T);
    }

    #[test]
    fn test_type_code_rejects_wrong_axis_order() {
        assert_eq!(
            "NETJ".parse::<TypeCode>(),
            Err(AssessmentError::InvalidTypeCode("NETJ".into()))
        );
        assert!("ENT".parse::<TypeCode>().is_err());
        assert!("ENTX".parse::<TypeCode>().is_err());

        let err = serde_json::from_str::<TypeCode>("\"ENTX\"").unwrap_err();
        assert!(err.to_string().contains("invalid type code 'ENTX'"));
    }

    #[test]
    fn test_type_code_serializes_as_string() {
        let code: TypeCode = "ISFP".parse().unwrap();
        assert_eq!(serde_json::to_string(&code).unwrap(), "\"ISFP\"");
        let back: TypeCode = serde_json::from_str("\"ISFP\"").unwrap();
        assert_eq!(back, code);
    }

    #[test]
    fn test_fallback_is_distinguishable() {
        let fallback = OverallConfidence::Fallback;
        let computed = OverallConfidence::Computed { value: 75.0 };
        assert_eq!(fallback.value(), computed.value());
        assert_ne!(fallback, computed);
        assert!(!fallback.is_computed());

        let json = serde_json::to_value(fallback).unwrap();
        assert_eq!(json["source"], "fallback");
    }
}
