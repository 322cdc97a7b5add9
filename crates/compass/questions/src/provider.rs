//! The provider seam and a static, caller-supplied source.

use compass_types::{CompassResult, Question, QuestionSet, Seed};

/// Produces the question sequence for a seed.
///
/// Implementations must be deterministic: the same seed yields the same
/// sequence. Any failure to derive a usable sequence is reported as
/// `AssessmentError::InvalidSeed`.
pub trait QuestionSetProvider: Send + Sync {
    fn question_set(&self, seed: &Seed) -> CompassResult<QuestionSet>;
}

/// A fixed question list supplied by the caller.
///
/// The list is validated every time a set is produced, so a malformed
/// source fails at session start rather than during scoring.
#[derive(Clone, Debug, Default)]
pub struct StaticQuestionSource {
    questions: Vec<Question>,
}

impl StaticQuestionSource {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    /// Load questions from a JSON array.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let questions: Vec<Question> = serde_json::from_str(json)?;
        Ok(Self::new(questions))
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

impl QuestionSetProvider for StaticQuestionSource {
    fn question_set(&self, seed: &Seed) -> CompassResult<QuestionSet> {
        validate_question_set(seed, self.questions.clone())
    }
}

/// Shared validation for every provider: a usable seed, then a non-empty
/// list of well-formed questions with unique ids.
pub fn validate_question_set(seed: &Seed, questions: Vec<Question>) -> CompassResult<QuestionSet> {
    seed.validate()?;
    QuestionSet::new(seed.clone(), questions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use compass_types::{AssessmentError, Pole};

    #[test]
    fn test_static_source_from_json() {
        let source = StaticQuestionSource::from_json(
            r#"[
                {"id": "q1", "text": "Recharge by",
                 "options": [
                    {"label": "People", "value": "A", "pole": "E"},
                    {"label": "Solitude", "value": "B", "pole": "I"}
                 ]}
            ]"#,
        )
        .unwrap();
        assert_eq!(source.len(), 1);

        let set = source.question_set(&Seed::Numeric(3)).unwrap();
        assert_eq!(set.get(0).unwrap().options[1].pole, Pole::I);
    }

    #[test]
    fn test_static_source_rejects_malformed_question() {
        let source = StaticQuestionSource::from_json(
            r#"[
                {"id": "q1", "text": "Broken",
                 "options": [
                    {"label": "x", "value": "A", "pole": "E"},
                    {"label": "y", "value": "B", "pole": "N"}
                 ]}
            ]"#,
        )
        .unwrap();
        let err = source.question_set(&Seed::Numeric(3)).unwrap_err();
        assert!(matches!(err, AssessmentError::InvalidSeed(_)));
    }

    #[test]
    fn test_empty_static_source_is_invalid_seed() {
        let source = StaticQuestionSource::default();
        assert!(source.is_empty());
        assert!(matches!(
            source.question_set(&Seed::Numeric(1)),
            Err(AssessmentError::InvalidSeed(_))
        ));
    }
}
