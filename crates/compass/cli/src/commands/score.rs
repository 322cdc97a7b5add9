//! Rescore a stored result record

use compass_questions::QuestionSetProvider;
use compass_engine::ResultRecord;
use compass_scoring::Scorer;

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::output::{print_result_table, print_single, print_success, OutputFormat};

use super::{question_bank, read_input};

/// Rebuild the question set from the record's seed and rescore its
/// answers. Fails unless the rescored result equals the stored one.
pub fn execute(record_path: &str, config: &CliConfig, format: OutputFormat) -> CliResult<()> {
    let record: ResultRecord = serde_json::from_str(&read_input(record_path)?)?;
    let set = question_bank(config).question_set(&record.seed)?;
    let scorer = Scorer::from_config(&config.assessment)?;
    let rescored = scorer.score(&set, &record.result.answers)?;

    if rescored != record.result {
        return Err(CliError::Mismatch {
            stored: record.result.type_code.to_string(),
            rescored: rescored.type_code.to_string(),
        });
    }

    match format {
        OutputFormat::Table => {
            print_success(&format!("Session {} reproduces", record.session_id));
            print_result_table(&rescored, None);
            Ok(())
        }
        _ => print_single(&rescored, format),
    }
}
