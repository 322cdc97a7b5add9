//! Question set providers for Compass
//!
//! A provider turns a [`Seed`] into a validated [`QuestionSet`]. The same
//! seed always yields the same sequence.
//!
//! - [`ItemBank`]: the built-in 60-item bank, 15 items per axis, in its
//!   canonical interleaved order
//! - [`SeededQuestionBank`]: the bank dealt in shuffled rounds of one item
//!   per axis, with option order flipped, by a ChaCha8 generator keyed on
//!   the seed
//! - [`StaticQuestionSource`]: a caller-supplied list, e.g. loaded from
//!   JSON, validated before use
//!
//! [`Seed`]: compass_types::Seed
//! [`QuestionSet`]: compass_types::QuestionSet

#![deny(unsafe_code)]

pub mod bank;
pub mod provider;
pub mod seeded;

pub use bank::{BankItem, ItemBank, STANDARD_ITEMS};
pub use provider::{validate_question_set, QuestionSetProvider, StaticQuestionSource};
pub use seeded::SeededQuestionBank;

/// Value token of the option shown first.
pub const FIRST_OPTION_VALUE: &str = "A";

/// Value token of the option shown second.
pub const SECOND_OPTION_VALUE: &str = "B";
