//! The scoring reduction.

use std::collections::{HashMap, HashSet};

use compass_types::{
    Answer, AssessmentConfig, AssessmentError, AssessmentResult, AxisScore, CompassResult,
    ConfidenceBands, PerAxis, Question, QuestionId, QuestionSet, TieBreakPolicy, TypeCode,
};
use tracing::debug;

use crate::confidence::overall_confidence;
use crate::split::{dominant_pole, margin, percent_split};
use crate::tally::AxisTally;

/// Scores complete answer lists under a fixed policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scorer {
    bands: ConfidenceBands,
    tie_break: TieBreakPolicy,
}

impl Default for Scorer {
    fn default() -> Self {
        Self {
            bands: ConfidenceBands::default(),
            tie_break: TieBreakPolicy::default(),
        }
    }
}

impl Scorer {
    /// Build a scorer from validated policy.
    pub fn new(bands: ConfidenceBands, tie_break: TieBreakPolicy) -> CompassResult<Self> {
        bands.validate()?;
        tie_break.validate()?;
        Ok(Self { bands, tie_break })
    }

    pub fn from_config(config: &AssessmentConfig) -> CompassResult<Self> {
        Self::new(config.bands, config.tie_break)
    }

    pub fn bands(&self) -> &ConfidenceBands {
        &self.bands
    }

    pub fn tie_break(&self) -> &TieBreakPolicy {
        &self.tie_break
    }

    /// Score a complete answer list.
    ///
    /// Fails without a partial result if the answers do not cover the
    /// question set exactly once each, if an answer does not match its
    /// question, or if the set never presents some axis.
    pub fn score(
        &self,
        questions: &QuestionSet,
        answers: &[Answer],
    ) -> CompassResult<AssessmentResult> {
        validate_answers(questions, answers)?;

        let tally = AxisTally::from_answers(answers);
        let axes = PerAxis::from_fn(|axis| {
            let (first_count, second_count) = tally.counts(axis);
            let (first_percent, second_percent) = percent_split(first_count, second_count);
            let margin = margin(first_percent, second_percent);
            AxisScore {
                axis,
                first_count,
                second_count,
                first_percent,
                second_percent,
                dominant: dominant_pole(
                    axis,
                    first_count,
                    second_count,
                    self.tie_break.pole(axis),
                ),
                margin,
                label: self.bands.label_for(margin),
            }
        });

        let type_code = TypeCode::from_poles(axes.map(|_, score| score.dominant));
        let overall = overall_confidence(axes.map(|_, score| score.margin));

        debug!(
            type_code = %type_code,
            answers = answers.len(),
            overall = overall.value(),
            "Answers scored"
        );

        Ok(AssessmentResult {
            type_code,
            axes,
            overall,
            answers: answers.to_vec(),
        })
    }
}

/// Score with the policy from an assessment configuration.
pub fn score(
    questions: &QuestionSet,
    answers: &[Answer],
    config: &AssessmentConfig,
) -> CompassResult<AssessmentResult> {
    Scorer::from_config(config)?.score(questions, answers)
}

fn validate_answers(questions: &QuestionSet, answers: &[Answer]) -> CompassResult<()> {
    if let Some(axis) = questions.uncovered_axis() {
        return Err(AssessmentError::IncompleteAxisCoverage(axis));
    }

    if answers.len() != questions.len() {
        return Err(AssessmentError::AnswerCountMismatch {
            expected: questions.len(),
            actual: answers.len(),
        });
    }

    let by_id: HashMap<&QuestionId, &Question> =
        questions.iter().map(|q| (&q.id, q)).collect();
    let mut answered = HashSet::with_capacity(answers.len());

    for answer in answers {
        let question = by_id
            .get(&answer.question_id)
            .ok_or_else(|| AssessmentError::UnknownQuestion(answer.question_id.clone()))?;

        if !answered.insert(&answer.question_id) {
            return Err(AssessmentError::DuplicateAnswer(answer.question_id.clone()));
        }

        match question.option_for_value(&answer.value) {
            Some(option) if option.pole == answer.pole => {}
            _ => {
                return Err(AssessmentError::InvalidAnswer {
                    question_id: answer.question_id.clone(),
                    value: answer.value.clone(),
                })
            }
        }
    }

    Ok(())
}
