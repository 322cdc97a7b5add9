//! Questions and question sets
//!
//! A question offers exactly two options. Each option is tagged with a
//! pole, and the two poles are the opposite ends of the same axis.
//! A [`QuestionSet`] is the validated, ordered sequence a session walks.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::axis::{Axis, Pole};
use crate::error::{AssessmentError, CompassResult};
use crate::seed::Seed;

// ── Question Identifier ──────────────────────────────────────────────

/// Stable identifier of a question, independent of its position.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct QuestionId(pub String);

impl QuestionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for QuestionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── Question ─────────────────────────────────────────────────────────

/// One selectable option of a question.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionOption {
    /// Text shown to the respondent
    pub label: String,
    /// Token submitted when this option is chosen
    pub value: String,
    /// Pole this option counts toward
    pub pole: Pole,
}

impl QuestionOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>, pole: Pole) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            pole,
        }
    }
}

/// A forced-choice question with exactly two options.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub text: String,
    pub options: [QuestionOption; 2],
}

impl Question {
    /// Create a validated question.
    pub fn new(
        id: impl Into<String>,
        text: impl Into<String>,
        first: QuestionOption,
        second: QuestionOption,
    ) -> CompassResult<Self> {
        let question = Self {
            id: QuestionId::new(id),
            text: text.into(),
            options: [first, second],
        };
        question.validate()?;
        Ok(question)
    }

    /// Check the paired-option invariant.
    pub fn validate(&self) -> CompassResult<()> {
        let [a, b] = &self.options;
        let invalid = |reason: &str| AssessmentError::InvalidQuestion {
            question_id: self.id.clone(),
            reason: reason.to_string(),
        };

        if self.id.0.trim().is_empty() {
            return Err(invalid("empty question id"));
        }
        if a.pole.axis() != b.pole.axis() {
            return Err(invalid("options tag different axes"));
        }
        if a.pole == b.pole {
            return Err(invalid("options tag the same pole"));
        }
        if a.value == b.value {
            return Err(invalid("options share a value token"));
        }
        if a.value.trim().is_empty() || b.value.trim().is_empty() {
            return Err(invalid("option value token is empty"));
        }
        Ok(())
    }

    /// The axis this question measures.
    pub fn axis(&self) -> Axis {
        self.options[0].pole.axis()
    }

    /// Find the option whose value token matches.
    pub fn option_for_value(&self, value: &str) -> Option<&QuestionOption> {
        self.options.iter().find(|o| o.value == value)
    }

    /// Find the option tagged with a pole.
    pub fn option_for_pole(&self, pole: Pole) -> Option<&QuestionOption> {
        self.options.iter().find(|o| o.pole == pole)
    }
}

// ── Question Set ─────────────────────────────────────────────────────

/// The ordered, validated questions produced for a seed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct QuestionSet {
    seed: Seed,
    questions: Vec<Question>,
}

impl QuestionSet {
    /// Validate and build a question set.
    ///
    /// Any structural problem is reported as [`AssessmentError::InvalidSeed`]
    /// because no usable sequence can be derived for the seed.
    pub fn new(seed: Seed, questions: Vec<Question>) -> CompassResult<Self> {
        if questions.is_empty() {
            return Err(AssessmentError::InvalidSeed(format!(
                "seed {seed} produced an empty question set"
            )));
        }

        let mut seen = HashSet::with_capacity(questions.len());
        for question in &questions {
            question
                .validate()
                .map_err(|e| AssessmentError::InvalidSeed(format!("seed {seed}: {e}")))?;
            if !seen.insert(&question.id) {
                return Err(AssessmentError::InvalidSeed(format!(
                    "seed {seed}: duplicate question id {}",
                    question.id
                )));
            }
        }

        Ok(Self { seed, questions })
    }

    pub fn seed(&self) -> &Seed {
        &self.seed
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn find(&self, id: &QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| &q.id == id)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }

    /// Number of questions presenting each axis.
    pub fn axis_counts(&self) -> crate::PerAxis<usize> {
        let mut counts = crate::PerAxis::<usize>::default();
        for question in &self.questions {
            *counts.get_mut(question.axis()) += 1;
        }
        counts
    }

    /// First axis (in type-code order) that no question presents.
    pub fn uncovered_axis(&self) -> Option<Axis> {
        let counts = self.axis_counts();
        Axis::ALL.into_iter().find(|axis| *counts.get(*axis) == 0)
    }
}
