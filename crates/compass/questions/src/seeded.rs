//! Seeded ordering of the item bank.
//!
//! Question order and, optionally, option order are shuffled by a
//! ChaCha8 generator keyed on the seed's 64-bit value. ChaCha8 output is
//! fixed by its algorithm, so a seed maps to the same sequence on every
//! platform and release.
//!
//! Questions are dealt in rounds: each round takes one unused item from
//! every axis that still has one, in shuffled order. While all axes have
//! items left, every run of four positions starting at a multiple of four
//! presents all four axes, so any stage of at least seven questions does
//! too when the bank is balanced.

use compass_types::{Axis, CompassResult, PerAxis, Question, QuestionSet, Seed};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::bank::ItemBank;
use crate::provider::{validate_question_set, QuestionSetProvider};
use crate::{FIRST_OPTION_VALUE, SECOND_OPTION_VALUE};

/// Item bank served in a seed-determined order.
#[derive(Clone, Debug)]
pub struct SeededQuestionBank {
    bank: ItemBank,
    shuffle_options: bool,
}

impl SeededQuestionBank {
    /// Shuffle the standard bank, including option order.
    pub fn standard() -> Self {
        Self::new(ItemBank::standard())
    }

    pub fn new(bank: ItemBank) -> Self {
        Self {
            bank,
            shuffle_options: true,
        }
    }

    /// Keep option A on the first-listed pole of every question.
    pub fn without_option_shuffle(mut self) -> Self {
        self.shuffle_options = false;
        self
    }

    pub fn bank(&self) -> &ItemBank {
        &self.bank
    }
}

impl Default for SeededQuestionBank {
    fn default() -> Self {
        Self::standard()
    }
}

/// Swap the two options; value tokens stay positional.
fn swap_options(question: &mut Question) {
    question.options.swap(0, 1);
    question.options[0].value = FIRST_OPTION_VALUE.to_string();
    question.options[1].value = SECOND_OPTION_VALUE.to_string();
}

/// Shuffle within each axis, then deal one item per axis per round.
fn deal_in_rounds(questions: Vec<Question>, rng: &mut ChaCha8Rng) -> Vec<Question> {
    let total = questions.len();
    let mut buckets: PerAxis<Vec<Question>> = PerAxis::default();
    for question in questions {
        buckets.get_mut(question.axis()).push(question);
    }
    for axis in Axis::ALL {
        buckets.get_mut(axis).shuffle(rng);
    }

    let mut dealt = Vec::with_capacity(total);
    loop {
        let mut round: Vec<Question> = Axis::ALL
            .iter()
            .filter_map(|&axis| buckets.get_mut(axis).pop())
            .collect();
        if round.is_empty() {
            break;
        }
        round.shuffle(rng);
        dealt.extend(round);
    }
    dealt
}

impl QuestionSetProvider for SeededQuestionBank {
    fn question_set(&self, seed: &Seed) -> CompassResult<QuestionSet> {
        seed.validate()?;

        let mut rng = ChaCha8Rng::seed_from_u64(seed.value());
        let mut questions = deal_in_rounds(self.bank.questions()?, &mut rng);

        if self.shuffle_options {
            for question in &mut questions {
                if rng.gen_bool(0.5) {
                    swap_options(question);
                }
            }
        }

        debug!(seed = %seed, questions = questions.len(), "Question set derived");
        validate_question_set(seed, questions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use compass_types::QuestionId;
    use std::collections::HashSet;

    fn ids(set: &QuestionSet) -> Vec<QuestionId> {
        set.iter().map(|q| q.id.clone()).collect()
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let provider = SeededQuestionBank::standard();
        let a = provider.question_set(&Seed::Numeric(1_700_000_000_000)).unwrap();
        let b = provider.question_set(&Seed::Numeric(1_700_000_000_000)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_text_and_numeric_forms_agree() {
        let provider = SeededQuestionBank::standard();
        let a = provider.question_set(&Seed::parse("12345").unwrap()).unwrap();
        let b = provider.question_set(&Seed::Numeric(12345)).unwrap();
        assert_eq!(ids(&a), ids(&b));
    }

    #[test]
    fn test_different_seeds_differ() {
        let provider = SeededQuestionBank::standard();
        let a = provider.question_set(&Seed::Numeric(1)).unwrap();
        let b = provider.question_set(&Seed::Numeric(2)).unwrap();
        assert_ne!(ids(&a), ids(&b));
    }

    #[test]
    fn test_shuffle_keeps_every_item_and_axis_coverage() {
        let set = SeededQuestionBank::standard()
            .question_set(&Seed::Text("retro".into()))
            .unwrap();
        assert_eq!(set.len(), 60);
        for axis in Axis::ALL {
            assert_eq!(*set.axis_counts().get(axis), 15);
        }
    }

    #[test]
    fn test_every_stage_touches_every_axis() {
        let set = SeededQuestionBank::standard()
            .question_set(&Seed::Numeric(1_700_000_000_000))
            .unwrap();
        let questions: Vec<&Question> = set.iter().collect();
        for stage in questions.chunks(15) {
            let axes: HashSet<Axis> = stage.iter().map(|q| q.axis()).collect();
            assert_eq!(axes.len(), 4);
        }
    }

    #[test]
    fn test_order_is_not_a_fixed_axis_cycle() {
        let provider = SeededQuestionBank::standard();
        let a = provider.question_set(&Seed::Numeric(3)).unwrap();
        let b = provider.question_set(&Seed::Numeric(4)).unwrap();
        let axes = |set: &QuestionSet| set.iter().map(|q| q.axis()).collect::<Vec<_>>();
        assert_ne!(axes(&a), axes(&b));
    }

    #[test]
    fn test_option_shuffle_keeps_positional_tokens() {
        let set = SeededQuestionBank::standard()
            .question_set(&Seed::Numeric(99))
            .unwrap();
        let mut swapped = 0;
        for q in set.iter() {
            assert_eq!(q.options[0].value, FIRST_OPTION_VALUE);
            assert_eq!(q.options[1].value, SECOND_OPTION_VALUE);
            assert!(q.validate().is_ok());
            if !q.options[0].pole.is_first() {
                swapped += 1;
            }
        }
        assert!(swapped > 0 && swapped < 60);
    }

    #[test]
    fn test_without_option_shuffle() {
        let set = SeededQuestionBank::standard()
            .without_option_shuffle()
            .question_set(&Seed::Numeric(99))
            .unwrap();
        assert!(set.iter().all(|q| q.options[0].pole.is_first()));
    }

    #[test]
    fn test_blank_text_seed_rejected() {
        let err = SeededQuestionBank::standard()
            .question_set(&Seed::Text("  ".into()))
            .unwrap_err();
        assert!(matches!(err, compass_types::AssessmentError::InvalidSeed(_)));
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Any seed yields a full, deterministic, valid sequence.
            #[test]
            fn any_seed_is_deterministic(seed in any::<u64>()) {
                let provider = SeededQuestionBank::standard();
                let a = provider.question_set(&Seed::Numeric(seed)).unwrap();
                let b = provider.question_set(&Seed::Numeric(seed)).unwrap();
                prop_assert_eq!(a.len(), 60);
                prop_assert!(a.uncovered_axis().is_none());
                prop_assert_eq!(a, b);
            }

            /// Every 15-question stage of a seeded sequence presents all axes.
            #[test]
            fn any_seed_mixes_axes_per_stage(seed in any::<u64>()) {
                let set = SeededQuestionBank::standard()
                    .question_set(&Seed::Numeric(seed))
                    .unwrap();
                let questions: Vec<&Question> = set.iter().collect();
                for stage in questions.chunks(15) {
                    let axes: HashSet<Axis> = stage.iter().map(|q| q.axis()).collect();
                    prop_assert_eq!(axes.len(), 4);
                }
            }
        }
    }
}
