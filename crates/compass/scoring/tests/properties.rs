//! Property tests for the scoring reduction.

use compass_questions::{QuestionSetProvider, SeededQuestionBank};
use compass_scoring::{percent_split, Scorer};
use compass_types::{Answer, Axis, QuestionSet, Seed};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Helpers / Strategies
// ---------------------------------------------------------------------------

fn question_set(seed: u64) -> QuestionSet {
    SeededQuestionBank::standard()
        .question_set(&Seed::Numeric(seed))
        .unwrap()
}

/// Answer every question, taking option A where `picks[i]` is true.
fn answers_for(set: &QuestionSet, picks: &[bool]) -> Vec<Answer> {
    set.iter()
        .zip(picks)
        .map(|(question, take_first)| {
            let option = &question.options[if *take_first { 0 } else { 1 }];
            Answer::new(question.id.clone(), option.value.clone(), option.pole)
        })
        .collect()
}

fn arb_picks() -> impl Strategy<Value = Vec<bool>> {
    prop::collection::vec(any::<bool>(), 60)
}

// ---------------------------------------------------------------------------
// Property Tests
// ---------------------------------------------------------------------------

proptest! {
    /// Valid answer lists always score, and every pair sums to 100.
    #[test]
    fn valid_answers_always_score(seed in any::<u64>(), picks in arb_picks()) {
        let set = question_set(seed);
        let answers = answers_for(&set, &picks);
        let result = Scorer::default().score(&set, &answers).unwrap();

        for axis in Axis::ALL {
            let score = result.axis(axis);
            prop_assert_eq!(score.first_percent + score.second_percent, 100);
            prop_assert_eq!(score.first_count + score.second_count, 15);
        }
    }

    /// The dominant pole always holds at least half of its axis.
    #[test]
    fn dominant_pole_has_majority(seed in any::<u64>(), picks in arb_picks()) {
        let set = question_set(seed);
        let answers = answers_for(&set, &picks);
        let result = Scorer::default().score(&set, &answers).unwrap();

        for axis in Axis::ALL {
            let score = result.axis(axis);
            prop_assert!(score.percent_of(score.dominant).unwrap() >= 50);
            prop_assert_eq!(result.type_code.pole(axis), score.dominant);
        }
    }

    /// Scoring is a pure function of its inputs.
    #[test]
    fn rescoring_is_identical(seed in any::<u64>(), picks in arb_picks()) {
        let set = question_set(seed);
        let answers = answers_for(&set, &picks);
        let scorer = Scorer::default();

        let first = scorer.score(&set, &answers).unwrap();
        let second = scorer.score(&set, &answers).unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(
            serde_json::to_vec(&first).unwrap(),
            serde_json::to_vec(&second).unwrap()
        );
    }

    /// Overall confidence stays within 50..=100.
    #[test]
    fn overall_confidence_in_range(seed in any::<u64>(), picks in arb_picks()) {
        let set = question_set(seed);
        let answers = answers_for(&set, &picks);
        let value = Scorer::default().score(&set, &answers).unwrap().overall.value();
        prop_assert!((50.0..=100.0).contains(&value));
    }

    /// Percent splits sum to 100 for arbitrary counts, including even splits.
    #[test]
    fn split_complement(first in 0u32..10_000, second in 0u32..10_000) {
        let (a, b) = percent_split(first, second);
        prop_assert_eq!(a + b, 100);
        if first == second {
            prop_assert_eq!(a, 50);
        }
    }
}
