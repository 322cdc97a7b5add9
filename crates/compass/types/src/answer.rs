//! Answers and progress reporting.

use serde::{Deserialize, Serialize};

use crate::axis::Pole;
use crate::question::QuestionId;

/// The option a respondent picked for one question.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Answer {
    pub question_id: QuestionId,
    /// Value token of the chosen option
    pub value: String,
    /// Pole the chosen option counts toward
    pub pole: Pole,
}

impl Answer {
    pub fn new(question_id: QuestionId, value: impl Into<String>, pole: Pole) -> Self {
        Self {
            question_id,
            value: value.into(),
            pole,
        }
    }
}

/// Answers given so far out of the sequence length.
///
/// Reporting only; the session's own state is authoritative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub current: usize,
    pub total: usize,
}

impl Progress {
    pub fn new(current: usize, total: usize) -> Self {
        Self { current, total }
    }

    /// Completion percentage (0.0-100.0) for progress bars.
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.current as f64 / self.total as f64 * 100.0
    }

    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.current >= self.total
    }
}

impl std::fmt::Display for Progress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} / {}", self.current, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_percent() {
        assert_eq!(Progress::new(15, 60).percent(), 25.0);
        assert_eq!(Progress::new(0, 0).percent(), 0.0);
        assert!(Progress::new(60, 60).is_complete());
        assert!(!Progress::new(59, 60).is_complete());
        assert_eq!(Progress::new(3, 60).to_string(), "3 / 60");
    }
}
