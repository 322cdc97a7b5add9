//! Assessment engine: the entry point for running assessments
//!
//! The engine owns the live sessions. It:
//! 1. Derives a question set from a seed and starts a session
//! 2. Applies answers and stage resumes
//! 3. Attaches enrichment text at the edges, with defaults
//! 4. Emits exactly one result record per completed session
//!
//! Operations take `&mut self`; callers sharing an engine serialize access.

use std::collections::HashMap;
use std::sync::Arc;

use compass_questions::{QuestionSetProvider, SeededQuestionBank};
use compass_types::{AssessmentConfig, AssessmentError, Progress, Question, QuestionId, Seed};
use serde::Serialize;
use tracing::{info, warn};

use crate::enrichment::{Enricher, Enrichment};
use crate::error::{EngineError, EngineResult};
use crate::session::{Session, SessionId, SessionState, Step};
use crate::sink::{MemorySink, ResultRecord, ResultSink};
use crate::stage::StageInfo;

/// A freshly started session.
#[derive(Clone, Debug, Serialize)]
pub struct StartOutcome {
    pub session_id: SessionId,
    pub seed: Seed,
    pub questions: Vec<Question>,
    pub state: SessionState,
    pub progress: Progress,
    pub stage: StageInfo,
    pub welcome: String,
}

/// What the respondent sees next.
#[derive(Clone, Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NextStep {
    Question {
        question: Question,
        stage: StageInfo,
    },
    StageBreak {
        stage: StageInfo,
        encouragement: String,
    },
    Completed {
        record: Box<ResultRecord>,
    },
}

/// Result of an answer or a resume.
#[derive(Clone, Debug, Serialize)]
pub struct AnswerOutcome {
    pub state: SessionState,
    pub progress: Progress,
    pub next: NextStep,
}

/// Runs assessment sessions
pub struct AssessmentEngine {
    provider: Arc<dyn QuestionSetProvider>,
    config: AssessmentConfig,
    enricher: Enricher,
    sink: Arc<dyn ResultSink>,
    /// Live and completed sessions
    sessions: HashMap<SessionId, Session>,
    /// Records emitted for completed sessions
    records: HashMap<SessionId, ResultRecord>,
}

impl std::fmt::Debug for AssessmentEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssessmentEngine")
            .field("config", &self.config)
            .field("enricher", &self.enricher)
            .field("sessions", &self.sessions.len())
            .field("records", &self.records.len())
            .finish()
    }
}

impl AssessmentEngine {
    /// Create an engine over a question provider
    pub fn new(
        provider: Arc<dyn QuestionSetProvider>,
        config: AssessmentConfig,
    ) -> EngineResult<Self> {
        config.validate()?;
        Ok(Self {
            provider,
            config,
            enricher: Enricher::none(),
            sink: Arc::new(MemorySink::new()),
            sessions: HashMap::new(),
            records: HashMap::new(),
        })
    }

    /// Engine over the standard seeded bank
    pub fn standard(config: AssessmentConfig) -> EngineResult<Self> {
        Self::new(Arc::new(SeededQuestionBank::standard()), config)
    }

    pub fn with_enrichment(mut self, enrichment: Arc<dyn Enrichment>) -> Self {
        self.enricher = Enricher::new(enrichment);
        self
    }

    pub fn with_enricher(mut self, enricher: Enricher) -> Self {
        self.enricher = enricher;
        self
    }

    pub fn with_sink(mut self, sink: Arc<dyn ResultSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn config(&self) -> &AssessmentConfig {
        &self.config
    }

    // ── Session Lifecycle ────────────────────────────────────────────

    /// Start a session; a missing seed is generated from the clock.
    pub async fn start(&mut self, seed: Option<Seed>) -> EngineResult<StartOutcome> {
        let seed = seed.unwrap_or_else(Seed::generate);
        let session = Session::start(&seed, self.provider.as_ref(), &self.config)?;
        let welcome = self.enricher.welcome().await;

        let outcome = StartOutcome {
            session_id: session.id().clone(),
            seed: session.seed().clone(),
            questions: session.questions().questions().to_vec(),
            state: session.state().clone(),
            progress: session.progress(),
            stage: StageInfo::new(session.current_stage(), session.stage_count()),
            welcome,
        };
        self.sessions.insert(session.id().clone(), session);
        Ok(outcome)
    }

    /// Answer the current question of a session.
    pub async fn answer(
        &mut self,
        session_id: &SessionId,
        question_id: &QuestionId,
        value: &str,
    ) -> EngineResult<AnswerOutcome> {
        let session = self.session_mut(session_id)?;
        let step = session.answer_question(question_id, value)?;
        self.outcome(session_id, step).await
    }

    /// Leave a stage break.
    pub async fn resume(&mut self, session_id: &SessionId) -> EngineResult<AnswerOutcome> {
        let step = self.session_mut(session_id)?.resume()?;
        self.outcome(session_id, step).await
    }

    /// Drop a session and any record it emitted, returning both.
    pub fn discard(
        &mut self,
        session_id: &SessionId,
    ) -> EngineResult<(Session, Option<ResultRecord>)> {
        let session = self
            .sessions
            .remove(session_id)
            .ok_or_else(|| EngineError::SessionNotFound(session_id.clone()))?;
        let record = self.records.remove(session_id);
        info!(session_id = %session_id, completed = session.is_completed(), "Session discarded");
        Ok((session, record))
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn session(&self, session_id: &SessionId) -> EngineResult<&Session> {
        self.sessions
            .get(session_id)
            .ok_or_else(|| EngineError::SessionNotFound(session_id.clone()))
    }

    pub fn progress(&self, session_id: &SessionId) -> EngineResult<Progress> {
        Ok(self.session(session_id)?.progress())
    }

    pub fn current_question(&self, session_id: &SessionId) -> EngineResult<Option<&Question>> {
        Ok(self.session(session_id)?.current_question())
    }

    /// The record emitted when the session completed.
    pub fn completed_record(&self, session_id: &SessionId) -> EngineResult<&ResultRecord> {
        self.session(session_id)?;
        self.records
            .get(session_id)
            .ok_or_else(|| EngineError::NotCompleted(session_id.clone()))
    }

    /// Hand an emitted record to the sink again after a failed persist.
    pub async fn retry_persist(&self, session_id: &SessionId) -> EngineResult<()> {
        let record = self.completed_record(session_id)?;
        self.persist(record).await
    }

    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    pub fn active_session_count(&self) -> usize {
        self.sessions.values().filter(|s| !s.is_completed()).count()
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn session_mut(&mut self, session_id: &SessionId) -> EngineResult<&mut Session> {
        self.sessions
            .get_mut(session_id)
            .ok_or_else(|| EngineError::SessionNotFound(session_id.clone()))
    }

    async fn outcome(&mut self, session_id: &SessionId, step: Step) -> EngineResult<AnswerOutcome> {
        let session = self.session(session_id)?;
        let state = session.state().clone();
        let progress = session.progress();
        let stage = StageInfo::new(session.current_stage(), session.stage_count());

        let next = match step {
            Step::Question { index } => {
                let question = session
                    .questions()
                    .get(index)
                    .cloned()
                    .ok_or(AssessmentError::SessionCompleted)?;
                NextStep::Question { question, stage }
            }
            Step::StageBreak { stage: number } => NextStep::StageBreak {
                encouragement: self.enricher.encouragement(number).await,
                stage,
            },
            Step::Completed => {
                let record = self.emit(session_id).await?;
                NextStep::Completed {
                    record: Box::new(record),
                }
            }
        };

        Ok(AnswerOutcome {
            state,
            progress,
            next,
        })
    }

    /// Build, keep and persist the record for a just-completed session.
    async fn emit(&mut self, session_id: &SessionId) -> EngineResult<ResultRecord> {
        let session = self.session(session_id)?;
        let Some(result) = session.result().cloned() else {
            return Err(EngineError::NotCompleted(session_id.clone()));
        };
        let seed = session.seed().clone();

        let summary = self.enricher.summary(&result).await;
        let action_plan = self.enricher.action_plan(&result).await;
        let record = ResultRecord::new(session_id.clone(), seed, result, summary, action_plan);

        info!(
            session_id = %session_id,
            record_id = %record.id,
            type_code = %record.type_code(),
            "Result emitted"
        );
        self.records.insert(session_id.clone(), record.clone());
        self.persist(&record).await?;
        Ok(record)
    }

    async fn persist(&self, record: &ResultRecord) -> EngineResult<()> {
        self.sink.persist(record).await.map_err(|source| {
            warn!(
                session_id = %record.session_id,
                error = %source,
                "Result sink rejected record"
            );
            EngineError::Sink {
                session_id: record.session_id.clone(),
                source,
            }
        })
    }
}
