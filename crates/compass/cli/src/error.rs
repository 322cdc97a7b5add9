//! CLI error types

use compass_engine::EngineError;
use compass_types::AssessmentError;
use thiserror::Error;

/// CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Assessment error: {0}")]
    Assessment(#[from] AssessmentError),

    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Result does not reproduce: stored {stored}, rescored {rescored}")]
    Mismatch { stored: String, rescored: String },
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
