//! Stage labels and arithmetic.

use serde::{Deserialize, Serialize};

/// Names shown for the first stages of the standard assessment.
pub const STAGE_NAMES: [&str; 4] = ["Warm-up", "Focus", "Decisions", "Workflow"];

/// Number of stages needed for `total` questions (last stage may be short).
pub fn stage_count(total: usize, stage_size: usize) -> usize {
    if stage_size == 0 {
        return 0;
    }
    total.div_ceil(stage_size)
}

/// Number of stage breaks a complete run passes through.
///
/// No break follows the final question.
pub fn expected_stage_breaks(total: usize, stage_size: usize) -> usize {
    if total == 0 || stage_size == 0 {
        return 0;
    }
    (total - 1) / stage_size
}

/// Display name for a 1-based stage number.
pub fn stage_name(stage: usize) -> String {
    match stage.checked_sub(1).and_then(|i| STAGE_NAMES.get(i)) {
        Some(name) => (*name).to_string(),
        None => format!("Stage {stage}"),
    }
}

/// Stage indicator: "Stage 2 of 4 · Focus".
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageInfo {
    pub number: usize,
    pub total: usize,
    pub name: String,
}

impl StageInfo {
    pub fn new(number: usize, total: usize) -> Self {
        Self {
            number,
            total,
            name: stage_name(number),
        }
    }
}

impl std::fmt::Display for StageInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Stage {} of {} · {}", self.number, self.total, self.name)
    }
}
