//! Command implementations

pub mod questions;
pub mod run;
pub mod score;

use std::io::Read;

use compass_questions::SeededQuestionBank;
use compass_types::Seed;

use crate::config::CliConfig;
use crate::error::CliResult;

/// Seed from the command line, else from config, else none.
pub fn resolve_seed(arg: Option<&str>, config: &CliConfig) -> CliResult<Option<Seed>> {
    match arg.or(config.default_seed.as_deref()) {
        Some(raw) => Ok(Some(Seed::parse(raw)?)),
        None => Ok(None),
    }
}

/// Question bank configured for this invocation.
pub fn question_bank(config: &CliConfig) -> SeededQuestionBank {
    let bank = SeededQuestionBank::standard();
    if config.fixed_option_order {
        bank.without_option_shuffle()
    } else {
        bank
    }
}

/// Read a file, or stdin when the path is `-`.
pub fn read_input(path: &str) -> CliResult<String> {
    if path == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        Ok(std::fs::read_to_string(path)?)
    }
}
