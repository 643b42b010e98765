//! Global configuration parsing and validation.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::{AppError, Result};

fn default_true() -> bool {
    true
}

fn default_customer_name() -> String {
    "Natalie".into()
}

/// Global configuration parsed from `config.toml`.
///
/// The file is optional: every field has a default, and the desk runs
/// fine without any configuration at all.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct GlobalConfig {
    /// Populate the board with the demo tickets at startup.
    #[serde(default = "default_true")]
    pub seed_demo_data: bool,
    /// Customer name prefilled by the submission wizard.
    #[serde(default = "default_customer_name")]
    pub default_customer_name: String,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            seed_demo_data: true,
            default_customer_name: default_customer_name(),
        }
    }
}

impl GlobalConfig {
    /// Load and validate configuration from a TOML file path.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the file cannot be read or contains
    /// invalid TOML, or if validation fails.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .map_err(|err| AppError::Config(format!("failed to read config: {err}")))?;
        Self::from_toml_str(&raw)
    }

    /// Parse configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if parsing or validation fails.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.default_customer_name.trim().is_empty() {
            return Err(AppError::Config(
                "default_customer_name must not be empty".into(),
            ));
        }
        Ok(())
    }
}
