//! Property tests for staging.

use compass_engine::{expected_stage_breaks, Session, Step};
use compass_questions::ItemBank;
use compass_types::{AssessmentConfig, Seed};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Property Tests
// ---------------------------------------------------------------------------

proptest! {
    /// A full run passes through floor(total / size) breaks, one fewer when
    /// the size divides the total, and every break lands on a boundary.
    #[test]
    fn break_count_matches_stage_arithmetic(
        per_axis in 1usize..=15,
        stage_size in 1usize..=20,
        picks in prop::collection::vec(any::<bool>(), 60),
        seed in any::<u64>(),
    ) {
        let config = AssessmentConfig::default().with_stage_size(stage_size);
        let mut session = Session::start(
            &Seed::Numeric(seed),
            &ItemBank::standard().with_items_per_axis(per_axis),
            &config,
        )
        .unwrap();
        let total = per_axis * 4;

        let mut breaks = 0;
        let mut i = 0;
        loop {
            let value = if picks[i] { "A" } else { "B" };
            i += 1;
            match session.answer(value).unwrap() {
                Step::Question { .. } => {}
                Step::StageBreak { stage } => {
                    breaks += 1;
                    prop_assert_eq!(stage, breaks);
                    prop_assert_eq!(session.progress().current, stage * stage_size);
                    prop_assert!(session.resume().is_ok());
                }
                Step::Completed => break,
            }
        }

        prop_assert_eq!(breaks, expected_stage_breaks(total, stage_size));
        prop_assert_eq!(session.progress().current, total);
        prop_assert!(session.result().is_some());
    }

    /// Rejected answers never move the session.
    #[test]
    fn invalid_values_never_advance(value in "[C-Z]{1,3}", seed in any::<u64>()) {
        let mut session = Session::start(
            &Seed::Numeric(seed),
            &ItemBank::standard().with_items_per_axis(2),
            &AssessmentConfig::default(),
        )
        .unwrap();
        let before = session.state().clone();
        prop_assert!(session.answer(&value).is_err());
        prop_assert_eq!(session.state(), &before);
        prop_assert_eq!(session.progress().current, 0);
    }
}
