//! Engine error types

use compass_types::AssessmentError;
use thiserror::Error;

use crate::session::SessionId;
use crate::sink::SinkError;

/// Errors from the assessment engine facade
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Assessment(#[from] AssessmentError),

    #[error("session not found: {0}")]
    SessionNotFound(SessionId),

    #[error("session {0} has not completed")]
    NotCompleted(SessionId),

    #[error("failed to persist result for session {session_id}: {source}")]
    Sink {
        session_id: SessionId,
        #[source]
        source: SinkError,
    },
}

impl EngineError {
    /// The underlying assessment error, if this is one.
    pub fn assessment(&self) -> Option<&AssessmentError> {
        match self {
            EngineError::Assessment(e) => Some(e),
            _ => None,
        }
    }
}

/// Result type for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
