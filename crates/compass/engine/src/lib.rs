//! Compass Assessment Engine
//!
//! Runs staged forced-choice assessments on top of `compass-questions` and
//! `compass-scoring`:
//!
//! - [`Session`]: the per-respondent state machine (in progress, stage
//!   break, completed)
//! - [`AssessmentEngine`]: owns sessions by id, attaches enrichment text and
//!   emits one [`ResultRecord`] per completed session
//! - [`Enricher`]: optional external text with built-in fallbacks
//! - [`TeamDirectory`]: latest result per respondent, searchable by name,
//!   email and type

#![deny(unsafe_code)]

pub mod directory;
pub mod engine;
pub mod enrichment;
pub mod error;
pub mod session;
pub mod sink;
pub mod stage;

pub use directory::{
    DirectoryQuery, DirectorySink, Profile, Respondent, RespondentId, TeamDirectory,
};
pub use engine::{AnswerOutcome, AssessmentEngine, NextStep, StartOutcome};
pub use enrichment::{
    default_encouragement, default_summary, Enricher, Enrichment, EnrichmentError, NoEnrichment,
};
pub use error::{EngineError, EngineResult};
pub use session::{Session, SessionId, SessionState, Step};
pub use sink::{MemorySink, RecordId, ResultRecord, ResultSink, SinkError};
pub use stage::{expected_stage_breaks, stage_count, stage_name, StageInfo};
