//! Domain types for the Compass assessment engine
//!
//! Compass turns a seeded sequence of forced-choice questions into a
//! four-letter work-style type with per-axis percentage splits and
//! confidence labels. This crate holds the vocabulary shared by every
//! other crate in the workspace:
//!
//! - [`Axis`] and [`Pole`]: the closed set of four bipolar dimensions
//! - [`Question`] / [`QuestionSet`]: validated paired-option questions
//! - [`Answer`] and [`Progress`]: what the respondent has done so far
//! - [`AssessmentResult`]: the immutable scored outcome
//! - [`AssessmentConfig`]: stage size, confidence bands, tie-break policy
//! - [`AssessmentError`]: the validation failures every operation reports
//!
//! Nothing here performs I/O or holds global state.

#![deny(unsafe_code)]

pub mod answer;
pub mod axis;
pub mod config;
pub mod error;
pub mod question;
pub mod result;
pub mod seed;

pub use answer::{Answer, Progress};
pub use axis::{Axis, PerAxis, Pole};
pub use config::{AssessmentConfig, ConfidenceBands, TieBreakPolicy, DEFAULT_STAGE_SIZE};
pub use error::{AssessmentError, CompassResult};
pub use question::{Question, QuestionId, QuestionOption, QuestionSet};
pub use result::{
    AssessmentResult, AxisScore, ConfidenceLabel, OverallConfidence, TypeCode,
    FALLBACK_OVERALL_CONFIDENCE,
};
pub use seed::Seed;
