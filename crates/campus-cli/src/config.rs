//! CLI configuration
//!
//! Loaded from TOML (`--config`), then `CAMPUS_*` environment variables, then
//! command-line flags, each layer overriding the previous one.

use campus_core::config::{CampusConfig, ConfigMerge, ConfigValidation, ConfigValidator};
use campus_core::CampusError;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// How command results are printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON document
    Json,
}

/// Settings for the `campus-authz` binary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Default tracing filter when `RUST_LOG` is unset
    pub log_level: String,
    /// Output format
    pub output: OutputFormat,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            output: OutputFormat::Text,
        }
    }
}

impl CliConfig {
    /// Output format
    pub fn output_format(&self) -> OutputFormat {
        self.output
    }
}

/// Values given explicitly on the command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    /// Set by `--verbose`
    pub log_level: Option<String>,
    /// Set by `--output`
    pub output: Option<OutputFormat>,
}

impl CliOverrides {
    /// Overrides for the given flags; absent flags override nothing
    pub fn from_flags(verbose: bool, output: Option<OutputFormat>) -> Self {
        Self {
            log_level: verbose.then(|| "debug".to_string()),
            output,
        }
    }
}

impl ConfigValidation for CliConfig {
    fn validate(&self) -> Result<(), CampusError> {
        let mut validator = ConfigValidator::new();
        validator
            .non_empty("log_level", &self.log_level)
            .one_of("log_level", &self.log_level, LOG_LEVELS);
        validator.finish()
    }
}

impl ConfigMerge for CliConfig {
    type Overrides = CliOverrides;

    fn merge_with(&mut self, overrides: &CliOverrides) {
        if let Some(log_level) = &overrides.log_level {
            self.log_level.clone_from(log_level);
        }
        if let Some(output) = overrides.output {
            self.output = output;
        }
    }
}

impl CampusConfig for CliConfig {
    const KEYS: &'static [&'static str] = &["log_level", "output"];

    fn set_from_string(&mut self, key: &str, value: &str) -> Result<(), CampusError> {
        match key {
            "log_level" => self.log_level = value.to_string(),
            "output" => {
                self.output = OutputFormat::from_str(value, true)
                    .map_err(|_| CampusError::config(format!("invalid output format: {value}")))?;
            }
            other => return Err(CampusError::config(format!("unknown key: {other}"))),
        }
        Ok(())
    }
}
