//! Scoring for Compass assessments
//!
//! Reduces a complete, ordered answer list into an [`AssessmentResult`]:
//!
//! 1. Validate the answers against the question set
//! 2. Tally the chosen poles per axis ([`AxisTally`])
//! 3. Split each axis into a percentage pair summing to exactly 100
//! 4. Pick the dominant pole, resolving exact ties by policy
//! 5. Concatenate dominant poles into the type code
//! 6. Label each axis margin against the confidence bands
//! 7. Derive the overall confidence from the four margins
//!
//! Scoring is a pure, synchronous function. It performs no I/O and reads
//! no global state, so re-scoring stored answers reproduces the result
//! exactly.
//!
//! [`AssessmentResult`]: compass_types::AssessmentResult

#![deny(unsafe_code)]

pub mod confidence;
pub mod scorer;
pub mod split;
pub mod tally;

pub use confidence::{overall_confidence, overall_confidence_or_fallback};
pub use scorer::{score, Scorer};
pub use split::{dominant_pole, margin, percent_split};
pub use tally::AxisTally;
