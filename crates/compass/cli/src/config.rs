//! CLI configuration

use crate::error::{CliError, CliResult};
use compass_types::AssessmentConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// CLI configuration
///
/// ```toml
/// default_seed = "team-offsite"
///
/// [assessment]
/// stage_size = 15
///
/// [assessment.bands]
/// medium_min = 20
/// high_min = 50
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct CliConfig {
    /// Seed used when none is given on the command line
    pub default_seed: Option<String>,

    /// Keep answer options in bank order instead of shuffling them
    pub fixed_option_order: bool,

    /// Session and scoring policy
    pub assessment: AssessmentConfig,
}

impl CliConfig {
    /// Load configuration from file, falling back to defaults when absent.
    pub fn load(path: Option<&str>) -> CliResult<Self> {
        let config_path = match path {
            Some(p) => PathBuf::from(p),
            None => match Self::default_config_path() {
                Some(p) => p,
                None => return Ok(CliConfig::default()),
            },
        };

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)?;
            Self::from_toml_str(&contents)
        } else if path.is_some() {
            Err(CliError::Config(format!(
                "config file not found: {}",
                config_path.display()
            )))
        } else {
            Ok(CliConfig::default())
        }
    }

    pub fn from_toml_str(contents: &str) -> CliResult<Self> {
        let config: CliConfig =
            toml::from_str(contents).map_err(|e| CliError::Config(e.to_string()))?;
        config
            .assessment
            .validate()
            .map_err(|e| CliError::Config(e.to_string()))?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> CliResult<String> {
        toml::to_string_pretty(self).map_err(|e| CliError::Config(e.to_string()))
    }

    /// `$XDG_CONFIG_HOME/compass/config.toml` or the platform equivalent
    fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("compass").join("config.toml"))
    }
}
