//! Configuration system for the lint engine
//!
//! Reads configuration from YAML or JSON files. All sections default, so an
//! empty config runs every check at its default severity.

use crate::diagnostic::Severity;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Check settings
    pub checks: ChecksConfig,
}

/// Check selection and severity settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChecksConfig {
    /// Check ids to disable
    pub disabled: Vec<String>,

    /// If non-empty, only these check ids run
    pub enabled: Vec<String>,

    /// Per-check severity overrides
    pub severity: HashMap<String, Severity>,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a YAML or JSON file, dispatched on extension
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Ok(serde_yaml::from_str(&content)?),
            Some("json") => Ok(serde_json::from_str(&content)?),
            _ => Err(ConfigError::Invalid(format!(
                "unsupported config file: {}",
                path.display()
            ))),
        }
    }

    /// Whether a check should run
    pub fn is_check_enabled(&self, id: &str) -> bool {
        if self.checks.disabled.iter().any(|d| d == id) {
            return false;
        }
        if !self.checks.enabled.is_empty() {
            return self.checks.enabled.iter().any(|e| e == id);
        }
        true
    }

    /// Severity override for a check, if configured
    pub fn get_severity_override(&self, id: &str) -> Option<Severity> {
        self.checks.severity.get(id).copied()
    }
}
