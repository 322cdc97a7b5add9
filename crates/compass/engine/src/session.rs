//! Assessment sessions: the staged state machine
//!
//! A session walks one respondent through a question set:
//!
//! ```text
//! InProgress(0) ──answer──▶ InProgress(i+1)
//!       │                        │
//!       │            (i+1) % stage_size == 0, i+1 < total
//!       │                        ▼
//!       │               StageBreak(stage) ──resume──▶ InProgress(i+1)
//!       │
//!       └──answer (i+1 == total)──▶ Completed(result)
//! ```
//!
//! Scoring runs exactly once, when the last answer lands. A rejected call
//! never changes the session. Sessions are single-writer: callers must
//! serialize operations on the same session.

use chrono::{DateTime, Utc};
use compass_questions::QuestionSetProvider;
use compass_scoring::Scorer;
use compass_types::{
    Answer, AssessmentConfig, AssessmentError, AssessmentResult, CompassResult, Progress,
    Question, QuestionId, QuestionSet, Seed,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::stage;

// ── Session Identifier ───────────────────────────────────────────────

/// Unique identifier for a session
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub String);

impl SessionId {
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── Session State ────────────────────────────────────────────────────

/// Where a session is in its lifecycle.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SessionState {
    /// Waiting for the answer to the question at `index`
    InProgress { index: usize },
    /// Stage `stage` (1-based) just finished; `index` is the next question
    StageBreak { stage: usize, index: usize },
    /// All questions answered and scored
    Completed { result: Box<AssessmentResult> },
}

impl SessionState {
    pub fn name(&self) -> &'static str {
        match self {
            SessionState::InProgress { .. } => "in progress",
            SessionState::StageBreak { .. } => "at a stage break",
            SessionState::Completed { .. } => "completed",
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, SessionState::Completed { .. })
    }
}

/// What a successful `answer` or `resume` led to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// The question at `index` is up next
    Question { index: usize },
    /// A stage boundary was reached; `resume` continues
    StageBreak { stage: usize },
    /// The last answer landed and the session was scored
    Completed,
}

// ── Session ──────────────────────────────────────────────────────────

/// One respondent's pass through a question set.
#[derive(Clone, Debug)]
pub struct Session {
    id: SessionId,
    questions: QuestionSet,
    stage_size: usize,
    scorer: Scorer,
    answers: Vec<Answer>,
    state: SessionState,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Start a session on the sequence the provider derives from `seed`.
    pub fn start(
        seed: &Seed,
        provider: &dyn QuestionSetProvider,
        config: &AssessmentConfig,
    ) -> CompassResult<Self> {
        let questions = provider.question_set(seed)?;
        Self::from_question_set(questions, config)
    }

    /// Start a session on an already-derived question set.
    ///
    /// Rejects a set that never presents some axis, so a respondent is
    /// never asked to answer questions that cannot be scored.
    pub fn from_question_set(
        questions: QuestionSet,
        config: &AssessmentConfig,
    ) -> CompassResult<Self> {
        config.validate()?;
        if let Some(axis) = questions.uncovered_axis() {
            return Err(AssessmentError::IncompleteAxisCoverage(axis));
        }

        let session = Self {
            id: SessionId::generate(),
            scorer: Scorer::from_config(config)?,
            stage_size: config.stage_size,
            answers: Vec::with_capacity(questions.len()),
            questions,
            state: SessionState::InProgress { index: 0 },
            started_at: Utc::now(),
            completed_at: None,
        };

        info!(
            session_id = %session.id,
            seed = %session.questions.seed(),
            questions = session.questions.len(),
            stage_size = session.stage_size,
            "Assessment session started"
        );
        Ok(session)
    }

    // ── Transitions ──────────────────────────────────────────────────

    /// Answer the current question by option value token.
    pub fn answer(&mut self, selected_value: &str) -> CompassResult<Step> {
        let index = match &self.state {
            SessionState::InProgress { index } => *index,
            SessionState::StageBreak { .. } => {
                return Err(AssessmentError::InvalidTransition {
                    action: "answer",
                    state: self.state.name(),
                })
            }
            SessionState::Completed { .. } => return Err(AssessmentError::SessionCompleted),
        };

        let question = self
            .questions
            .get(index)
            .ok_or(AssessmentError::SessionCompleted)?;
        let option = question.option_for_value(selected_value).ok_or_else(|| {
            AssessmentError::InvalidAnswer {
                question_id: question.id.clone(),
                value: selected_value.to_string(),
            }
        })?;
        let answer = Answer::new(question.id.clone(), option.value.clone(), option.pole);

        let next_index = index + 1;
        let total = self.questions.len();
        self.answers.push(answer);

        if next_index == total {
            let result = match self.scorer.score(&self.questions, &self.answers) {
                Ok(result) => result,
                Err(e) => {
                    self.answers.pop();
                    return Err(e);
                }
            };
            info!(
                session_id = %self.id,
                type_code = %result.type_code,
                "Assessment session completed"
            );
            self.state = SessionState::Completed {
                result: Box::new(result),
            };
            self.completed_at = Some(Utc::now());
            return Ok(Step::Completed);
        }

        if next_index % self.stage_size == 0 {
            let stage = next_index / self.stage_size;
            debug!(session_id = %self.id, stage, "Stage completed");
            self.state = SessionState::StageBreak {
                stage,
                index: next_index,
            };
            return Ok(Step::StageBreak { stage });
        }

        self.state = SessionState::InProgress { index: next_index };
        Ok(Step::Question { index: next_index })
    }

    /// Answer addressed to a specific question.
    ///
    /// Only the current question may be answered; anything else would
    /// skip or replay part of the sequence.
    pub fn answer_question(
        &mut self,
        question_id: &QuestionId,
        selected_value: &str,
    ) -> CompassResult<Step> {
        if let SessionState::InProgress { index } = &self.state {
            if let Some(current) = self.questions.get(*index) {
                if &current.id != question_id {
                    return Err(AssessmentError::QuestionMismatch {
                        expected: current.id.clone(),
                        got: question_id.clone(),
                    });
                }
            }
        }
        self.answer(selected_value)
    }

    /// Leave a stage break and continue at the recorded index.
    pub fn resume(&mut self) -> CompassResult<Step> {
        match &self.state {
            SessionState::StageBreak { index, stage } => {
                let index = *index;
                debug!(session_id = %self.id, stage = *stage, "Resumed after stage break");
                self.state = SessionState::InProgress { index };
                Ok(Step::Question { index })
            }
            other => Err(AssessmentError::InvalidTransition {
                action: "resume",
                state: other.name(),
            }),
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    /// The question to show, or `None` once completed.
    ///
    /// During a stage break this is the question shown after `resume`.
    pub fn current_question(&self) -> Option<&Question> {
        self.current_index().and_then(|i| self.questions.get(i))
    }

    pub fn current_index(&self) -> Option<usize> {
        match &self.state {
            SessionState::InProgress { index } | SessionState::StageBreak { index, .. } => {
                Some(*index)
            }
            SessionState::Completed { .. } => None,
        }
    }

    /// Answers given out of the sequence length.
    pub fn progress(&self) -> Progress {
        Progress::new(self.answers.len(), self.questions.len())
    }

    /// 1-based stage for the stage indicator.
    ///
    /// At a stage break this is the stage just completed.
    pub fn current_stage(&self) -> usize {
        match &self.state {
            SessionState::InProgress { index } => index / self.stage_size + 1,
            SessionState::StageBreak { stage, .. } => *stage,
            SessionState::Completed { .. } => self.stage_count(),
        }
    }

    pub fn stage_count(&self) -> usize {
        stage::stage_count(self.questions.len(), self.stage_size)
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn seed(&self) -> &Seed {
        self.questions.seed()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn questions(&self) -> &QuestionSet {
        &self.questions
    }

    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    pub fn stage_size(&self) -> usize {
        self.stage_size
    }

    pub fn result(&self) -> Option<&AssessmentResult> {
        match &self.state {
            SessionState::Completed { result } => Some(result),
            _ => None,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.state.is_completed()
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }
}
