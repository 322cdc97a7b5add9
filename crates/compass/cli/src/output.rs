//! Output formatting utilities

use colored::*;
use compass_types::{AssessmentResult, AxisScore, ConfidenceLabel, Question};
use serde::Serialize;
use tabled::{Table, Tabled};

use crate::error::CliResult;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}

/// Print a list of rows in the specified format
pub fn print_output<T: Serialize + Tabled>(data: Vec<T>, format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Table => {
            if data.is_empty() {
                println!("{}", "No results".dimmed());
            } else {
                println!("{}", Table::new(data));
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&data)?),
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(&data)?),
    }
    Ok(())
}

/// Print a single item as JSON or YAML
pub fn print_single<T: Serialize>(data: &T, format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Table | OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(data)?)
        }
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(data)?),
    }
    Ok(())
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue(), message);
}

// ── Rows ─────────────────────────────────────────────────────────────

#[derive(Serialize, Tabled)]
pub struct QuestionRow {
    #[tabled(rename = "#")]
    pub position: usize,
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "Axis")]
    pub axis: String,
    #[tabled(rename = "Question")]
    pub text: String,
    #[tabled(rename = "Option A")]
    pub option_a: String,
    #[tabled(rename = "Option B")]
    pub option_b: String,
}

impl QuestionRow {
    pub fn new(position: usize, question: &Question) -> Self {
        let [a, b] = &question.options;
        Self {
            position,
            id: question.id.to_string(),
            axis: question.axis().to_string(),
            text: question.text.clone(),
            option_a: format!("{} ({})", a.label, a.pole),
            option_b: format!("{} ({})", b.label, b.pole),
        }
    }
}

#[derive(Serialize, Tabled)]
pub struct AxisRow {
    #[tabled(rename = "Axis")]
    pub axis: String,
    #[tabled(rename = "Split")]
    pub split: String,
    #[tabled(rename = "Dominant")]
    pub dominant: String,
    #[tabled(rename = "Margin")]
    pub margin: u32,
    #[tabled(rename = "Confidence")]
    pub confidence: String,
}

impl From<&AxisScore> for AxisRow {
    fn from(score: &AxisScore) -> Self {
        let [first, second] = score.axis.poles();
        Self {
            axis: score.axis.to_string(),
            split: format!(
                "{first} {}% / {second} {}%",
                score.first_percent, score.second_percent
            ),
            dominant: score.dominant.name().to_string(),
            margin: score.margin,
            confidence: label_text(score.label),
        }
    }
}

fn label_text(label: ConfidenceLabel) -> String {
    match label {
        ConfidenceLabel::High => "high".green().to_string(),
        ConfidenceLabel::Medium => "medium".yellow().to_string(),
        ConfidenceLabel::Low => "low".red().to_string(),
    }
}

/// Human-readable result block
pub fn print_result_table(result: &AssessmentResult, summary: Option<&str>) {
    println!(
        "Type: {}   Overall confidence: {}%",
        result.type_code.to_string().bold(),
        result.overall.display_percent()
    );
    let rows: Vec<AxisRow> = result.axes.iter().map(|(_, s)| AxisRow::from(s)).collect();
    println!("{}", Table::new(rows));
    if let Some(summary) = summary {
        println!("\n{summary}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use compass_types::{Pole, QuestionOption};

    #[test]
    fn test_output_format_default() {
        assert_eq!(OutputFormat::default(), OutputFormat::Table);
    }

    #[test]
    fn test_question_row() {
        let question = Question::new(
            "ei-01",
            "Where do ideas come from?",
            QuestionOption::new("Talking it through", "A", Pole::E),
            QuestionOption::new("Quiet thinking", "B", Pole::I),
        )
        .unwrap();
        let row = QuestionRow::new(1, &question);
        assert_eq!(row.axis, "EI");
        assert_eq!(row.option_a, "Talking it through (E)");
        assert_eq!(row.option_b, "Quiet thinking (I)");
    }
}
