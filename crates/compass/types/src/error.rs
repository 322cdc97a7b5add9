//! Error types for the Compass core.
//!
//! Every variant is a synchronous validation failure caused by the caller
//! or by a malformed question source. None of them are transient, so
//! nothing in the workspace retries on them, and a call that fails never
//! advances session state.

use thiserror::Error;

use crate::axis::Axis;
use crate::question::QuestionId;

/// Errors raised by question sets, sessions and scoring.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssessmentError {
    /// No valid question set can be derived from the seed.
    #[error("invalid seed: {0}")]
    InvalidSeed(String),

    /// The selected value matches neither option of the question.
    #[error("invalid answer '{value}' for question {question_id}")]
    InvalidAnswer {
        question_id: QuestionId,
        value: String,
    },

    /// Mutation attempted on a session that has already been scored.
    #[error("session already completed")]
    SessionCompleted,

    /// The operation is not allowed from the session's current state.
    #[error("cannot {action} while session is {state}")]
    InvalidTransition {
        action: &'static str,
        state: &'static str,
    },

    /// The question set never presents this axis, so it cannot be scored.
    #[error("question set never presents axis {0}")]
    IncompleteAxisCoverage(Axis),

    /// An answer was addressed to a question other than the current one.
    #[error("answer addressed to question {got}, current question is {expected}")]
    QuestionMismatch {
        expected: QuestionId,
        got: QuestionId,
    },

    /// The answer list does not have one entry per question.
    #[error("expected {expected} answers, got {actual}")]
    AnswerCountMismatch { expected: usize, actual: usize },

    /// An answer references a question that is not in the set.
    #[error("answer references unknown question {0}")]
    UnknownQuestion(QuestionId),

    /// More than one answer was given for the same question.
    #[error("duplicate answer for question {0}")]
    DuplicateAnswer(QuestionId),

    /// A question violates the paired-option invariant.
    #[error("invalid question {question_id}: {reason}")]
    InvalidQuestion {
        question_id: QuestionId,
        reason: String,
    },

    /// Text that is not a four-letter type code in axis order.
    #[error("invalid type code '{0}'")]
    InvalidTypeCode(String),

    /// Configuration failed validation or could not be parsed.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for Compass core operations.
pub type CompassResult<T> = Result<T, AssessmentError>;
