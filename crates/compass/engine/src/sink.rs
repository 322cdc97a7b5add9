//! Result records and where they go.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use compass_types::{AssessmentResult, Seed, TypeCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::debug;

use crate::session::SessionId;

/// Unique identifier for a stored result
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordId(pub String);

impl RecordId {
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A completed assessment, ready to store.
///
/// Carries the seed and the full answer list so the result can be
/// reproduced by rescoring.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub id: RecordId,
    pub session_id: SessionId,
    pub seed: Seed,
    pub result: AssessmentResult,
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_plan: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl ResultRecord {
    pub fn new(
        session_id: SessionId,
        seed: Seed,
        result: AssessmentResult,
        summary: impl Into<String>,
        action_plan: Option<String>,
    ) -> Self {
        Self {
            id: RecordId::generate(),
            session_id,
            seed,
            result,
            summary: summary.into(),
            action_plan,
            created_at: Utc::now(),
        }
    }

    pub fn type_code(&self) -> TypeCode {
        self.result.type_code
    }
}

/// Errors raised by a result sink
#[derive(Debug, Clone, Error)]
pub enum SinkError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("record already stored: {0}")]
    Duplicate(RecordId),

    #[error("storage rejected record: {0}")]
    Rejected(String),
}

/// Destination for completed results.
#[async_trait]
pub trait ResultSink: Send + Sync {
    async fn persist(&self, record: &ResultRecord) -> Result<(), SinkError>;
}

/// Sink that keeps records in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: RwLock<Vec<ResultRecord>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn records(&self) -> Vec<ResultRecord> {
        self.records.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl ResultSink for MemorySink {
    async fn persist(&self, record: &ResultRecord) -> Result<(), SinkError> {
        let mut records = self.records.write().await;
        if records.iter().any(|r| r.id == record.id) {
            return Err(SinkError::Duplicate(record.id.clone()));
        }
        debug!(record_id = %record.id, session_id = %record.session_id, "Result stored");
        records.push(record.clone());
        Ok(())
    }
}
