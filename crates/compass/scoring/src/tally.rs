//! Per-axis pole counts.

use compass_types::{Answer, Axis, PerAxis, Pole};

/// Count of answers selecting each pole, grouped by axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AxisTally {
    /// `[first-listed pole, second-listed pole]` for each axis
    counts: PerAxis<[u32; 2]>,
}

impl AxisTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tally an answer list.
    pub fn from_answers(answers: &[Answer]) -> Self {
        let mut tally = Self::new();
        for answer in answers {
            tally.record(answer.pole);
        }
        tally
    }

    pub fn record(&mut self, pole: Pole) {
        let slot = if pole.is_first() { 0 } else { 1 };
        self.counts.get_mut(pole.axis())[slot] += 1;
    }

    pub fn count(&self, pole: Pole) -> u32 {
        let [first, second] = *self.counts.get(pole.axis());
        if pole.is_first() {
            first
        } else {
            second
        }
    }

    /// `(first-listed, second-listed)` counts for an axis.
    pub fn counts(&self, axis: Axis) -> (u32, u32) {
        let [first, second] = *self.counts.get(axis);
        (first, second)
    }

    pub fn total(&self, axis: Axis) -> u32 {
        let (first, second) = self.counts(axis);
        first + second
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use compass_types::QuestionId;

    #[test]
    fn test_record_and_count() {
        let mut tally = AxisTally::new();
        tally.record(Pole::E);
        tally.record(Pole::E);
        tally.record(Pole::I);
        tally.record(Pole::P);

        assert_eq!(tally.count(Pole::E), 2);
        assert_eq!(tally.count(Pole::I), 1);
        assert_eq!(tally.counts(Axis::JP), (0, 1));
        assert_eq!(tally.total(Axis::EI), 3);
        assert_eq!(tally.total(Axis::SN), 0);
    }

    #[test]
    fn test_from_answers() {
        let answers = vec![
            Answer::new(QuestionId::new("a"), "A", Pole::N),
            Answer::new(QuestionId::new("b"), "B", Pole::N),
            Answer::new(QuestionId::new("c"), "A", Pole::F),
        ];
        let tally = AxisTally::from_answers(&answers);
        assert_eq!(tally.count(Pole::N), 2);
        assert_eq!(tally.count(Pole::S), 0);
        assert_eq!(tally.counts(Axis::TF), (0, 1));
    }
}
