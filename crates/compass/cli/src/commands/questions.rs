//! List the question sequence for a seed

use compass_questions::QuestionSetProvider;
use compass_types::Seed;

use crate::config::CliConfig;
use crate::error::CliResult;
use crate::output::{print_output, OutputFormat, QuestionRow};

use super::{question_bank, resolve_seed};

pub fn execute(seed: Option<&str>, config: &CliConfig, format: OutputFormat) -> CliResult<()> {
    let seed = resolve_seed(seed, config)?.unwrap_or_else(Seed::generate);
    let set = question_bank(config).question_set(&seed)?;

    if format == OutputFormat::Table {
        println!("Seed: {seed}");
    }
    let rows = set
        .iter()
        .enumerate()
        .map(|(i, q)| QuestionRow::new(i + 1, q))
        .collect();
    print_output(rows, format)
}
