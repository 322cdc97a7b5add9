//! Assessment configuration.
//!
//! Stage size, confidence bands and the tie-break pole for each axis are
//! policy, supplied from outside the core. Defaults reproduce the
//! reference sizing: 15-question stages, bands at 20 and 50 points, ties
//! going to the first-listed pole.

use serde::{Deserialize, Serialize};

use crate::axis::{Axis, PerAxis, Pole};
use crate::error::{AssessmentError, CompassResult};
use crate::result::ConfidenceLabel;

/// Questions per stage in the reference sizing.
pub const DEFAULT_STAGE_SIZE: usize = 15;

/// Configuration for sessions and scoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssessmentConfig {
    /// Questions per stage; a stage break follows each full stage.
    pub stage_size: usize,

    /// Margin thresholds for confidence labels.
    pub bands: ConfidenceBands,

    /// Pole awarded on an exact tie, per axis.
    pub tie_break: TieBreakPolicy,
}

impl Default for AssessmentConfig {
    fn default() -> Self {
        Self {
            stage_size: DEFAULT_STAGE_SIZE,
            bands: ConfidenceBands::default(),
            tie_break: TieBreakPolicy::default(),
        }
    }
}

impl AssessmentConfig {
    /// Short stages for demos and smoke runs.
    pub fn quick() -> Self {
        Self {
            stage_size: 5,
            ..Self::default()
        }
    }

    /// Parse a TOML document and validate it.
    pub fn from_toml_str(contents: &str) -> CompassResult<Self> {
        let config: AssessmentConfig =
            toml::from_str(contents).map_err(|e| AssessmentError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> CompassResult<()> {
        if self.stage_size == 0 {
            return Err(AssessmentError::InvalidConfig(
                "stage_size must be at least 1".into(),
            ));
        }
        self.bands.validate()?;
        self.tie_break.validate()
    }

    pub fn with_stage_size(mut self, stage_size: usize) -> Self {
        self.stage_size = stage_size;
        self
    }

    pub fn with_bands(mut self, bands: ConfidenceBands) -> Self {
        self.bands = bands;
        self
    }

    pub fn with_tie_break(mut self, tie_break: TieBreakPolicy) -> Self {
        self.tie_break = tie_break;
        self
    }
}

/// Margin thresholds (in percentage points) for confidence labels.
///
/// `margin >= high_min` is high, `margin >= medium_min` is medium,
/// anything lower is low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfidenceBands {
    pub medium_min: u32,
    pub high_min: u32,
}

impl Default for ConfidenceBands {
    fn default() -> Self {
        Self {
            medium_min: 20,
            high_min: 50,
        }
    }
}

impl ConfidenceBands {
    pub fn new(medium_min: u32, high_min: u32) -> CompassResult<Self> {
        let bands = Self {
            medium_min,
            high_min,
        };
        bands.validate()?;
        Ok(bands)
    }

    pub fn validate(&self) -> CompassResult<()> {
        if self.medium_min > self.high_min {
            return Err(AssessmentError::InvalidConfig(format!(
                "medium_min ({}) exceeds high_min ({})",
                self.medium_min, self.high_min
            )));
        }
        if self.high_min > 100 {
            return Err(AssessmentError::InvalidConfig(format!(
                "high_min ({}) exceeds 100",
                self.high_min
            )));
        }
        Ok(())
    }

    /// Label for a margin.
    pub fn label_for(&self, margin: u32) -> ConfidenceLabel {
        if margin >= self.high_min {
            ConfidenceLabel::High
        } else if margin >= self.medium_min {
            ConfidenceLabel::Medium
        } else {
            ConfidenceLabel::Low
        }
    }
}

/// Pole awarded on an exact tie, for each axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TieBreakPolicy(pub PerAxis<Pole>);

impl Default for TieBreakPolicy {
    /// First-listed pole of every pair: E, S, T, J.
    fn default() -> Self {
        Self(PerAxis::from_fn(Axis::first))
    }
}

impl TieBreakPolicy {
    pub fn pole(&self, axis: Axis) -> Pole {
        *self.0.get(axis)
    }

    /// Override the tie-break pole for the axis the pole belongs to.
    pub fn prefer(mut self, pole: Pole) -> Self {
        *self.0.get_mut(pole.axis()) = pole;
        self
    }

    pub fn validate(&self) -> CompassResult<()> {
        for (axis, pole) in self.0.iter() {
            if pole.axis() != axis {
                return Err(AssessmentError::InvalidConfig(format!(
                    "tie-break pole {pole} does not belong to axis {axis}"
                )));
            }
        }
        Ok(())
    }
}
