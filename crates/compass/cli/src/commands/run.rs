//! Run a full assessment from scripted answers

use std::sync::Arc;

use colored::*;
use compass_engine::{AssessmentEngine, NextStep, ResultRecord};
use compass_types::Question;
use tracing::debug;

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::output::{print_info, print_result_table, print_single, print_success, OutputFormat};

use super::{question_bank, read_input, resolve_seed};

/// Parse answer tokens: a JSON array of strings, or whitespace-separated.
pub fn parse_answers(input: &str) -> CliResult<Vec<String>> {
    let trimmed = input.trim();
    if trimmed.starts_with('[') {
        return Ok(serde_json::from_str(trimmed)?);
    }
    Ok(trimmed.split_whitespace().map(str::to_uppercase).collect())
}

pub async fn execute(
    seed: Option<&str>,
    answers_path: &str,
    config: &CliConfig,
    format: OutputFormat,
) -> CliResult<()> {
    let answers = parse_answers(&read_input(answers_path)?)?;
    let seed = resolve_seed(seed, config)?;
    let chatty = format == OutputFormat::Table;

    let mut engine =
        AssessmentEngine::new(Arc::new(question_bank(config)), config.assessment.clone())?;
    let start = engine.start(seed).await?;
    let total = start.questions.len();
    debug!(session_id = %start.session_id, total, "Running scripted assessment");

    if chatty {
        println!("{}", start.welcome.dimmed());
        print_info(&format!("Seed {} · {}", start.seed, start.stage));
    }

    let mut current: Question = start
        .questions
        .first()
        .cloned()
        .ok_or_else(|| CliError::InvalidArgument("question set is empty".into()))?;
    let mut tokens = answers.iter();

    let record: ResultRecord = loop {
        let token = tokens.next().ok_or_else(|| {
            CliError::InvalidArgument(format!(
                "answers ended after {} of {total} questions",
                engine
                    .progress(&start.session_id)
                    .map(|p| p.current)
                    .unwrap_or_default()
            ))
        })?;

        let outcome = engine.answer(&start.session_id, &current.id, token).await?;
        match outcome.next {
            NextStep::Question { question, .. } => current = question,
            NextStep::StageBreak {
                stage,
                encouragement,
            } => {
                if chatty {
                    print_success(&format!(
                        "{} complete ({}) · {encouragement}",
                        stage.name, outcome.progress
                    ));
                }
                match engine.resume(&start.session_id).await?.next {
                    NextStep::Question { question, .. } => current = question,
                    _ => {
                        return Err(CliError::InvalidArgument(
                            "session did not resume to a question".into(),
                        ))
                    }
                }
            }
            NextStep::Completed { record } => break *record,
        }
    };

    let leftover = tokens.count();
    if leftover > 0 {
        return Err(CliError::InvalidArgument(format!(
            "{leftover} answers left over after the last question"
        )));
    }

    if chatty {
        print_result_table(&record.result, Some(&record.summary));
        if let Some(plan) = &record.action_plan {
            println!("\n{plan}");
        }
        Ok(())
    } else {
        print_single(&record, format)
    }
}
