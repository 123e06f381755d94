//! Core configuration traits for Campus tools

use crate::CampusError;
use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::debug;

/// Trait for configuration validation
pub trait ConfigValidation {
    /// Validate this configuration
    fn validate(&self) -> Result<(), CampusError>;
}

/// Trait for configuration merging
pub trait ConfigMerge {
    /// Overrides from a later layer; unset fields keep the current value
    type Overrides;

    /// Apply every override that is set
    fn merge_with(&mut self, overrides: &Self::Overrides);
}

/// Configuration loaded from a TOML file, then overridden from the environment
pub trait CampusConfig: Clone + Default + DeserializeOwned + ConfigValidation {
    /// Prefix of environment variables that override file values
    const ENV_PREFIX: &'static str = "CAMPUS_";

    /// Keys accepted by [`set_from_string`](Self::set_from_string)
    const KEYS: &'static [&'static str];

    /// Parse configuration from TOML text
    fn from_toml_str(content: &str) -> Result<Self, CampusError> {
        toml_from_str(content)
    }

    /// Load configuration from a file
    fn load_from_file(path: &Path) -> Result<Self, CampusError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CampusError::config(format!("Failed to read config file {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&content)
    }

    /// Load from `path` when it exists, otherwise start from defaults
    fn load_or_default(path: &Path) -> Result<Self, CampusError> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Set a configuration value from a string key (environment or CLI)
    fn set_from_string(&mut self, key: &str, value: &str) -> Result<(), CampusError>;

    /// Apply every `ENV_PREFIX`-prefixed variable naming one of [`KEYS`](Self::KEYS)
    ///
    /// Other prefixed variables belong to someone else and are skipped.
    fn merge_with_vars<I>(&mut self, vars: I) -> Result<(), CampusError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        for (key, value) in vars {
            let Some(config_key) = key.strip_prefix(Self::ENV_PREFIX) else {
                continue;
            };
            let config_key = config_key.to_lowercase();
            if Self::KEYS.contains(&config_key.as_str()) {
                self.set_from_string(&config_key, &value)?;
            } else {
                debug!(variable = %key, "Skipping unrelated environment variable");
            }
        }
        Ok(())
    }

    /// Merge with process environment variables
    fn merge_with_env(&mut self) -> Result<(), CampusError> {
        self.merge_with_vars(std::env::vars())
    }

    /// Load, apply the environment and validate in one step
    fn resolve(path: &Path) -> Result<Self, CampusError> {
        let mut config = Self::load_or_default(path)?;
        config.merge_with_env()?;
        config.validate()?;
        Ok(config)
    }
}

fn toml_from_str<T: DeserializeOwned>(content: &str) -> Result<T, CampusError> {
    toml::from_str(content).map_err(|e| CampusError::config(format!("Invalid TOML: {e}")))
}
