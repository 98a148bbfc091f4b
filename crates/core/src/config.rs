//! Configuration management for procstate.

use crate::types::MasterStatus;
use serde::{Deserialize, Serialize};
#[cfg(feature = "toml")]
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub aggregation: AggregationConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// How the master status is derived from sub-unit statuses
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AggregationMode {
    /// Priority rules over the whole set of statuses
    #[default]
    Direct,
    /// Sequential application of the transition table
    Fold,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregationConfig {
    #[serde(default)]
    pub mode: AggregationMode,
    /// Starting state for fold mode
    #[serde(default = "default_initial_state")]
    pub initial_state: MasterStatus,
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            mode: AggregationMode::default(),
            initial_state: default_initial_state(),
        }
    }
}

fn default_initial_state() -> MasterStatus {
    MasterStatus::Done
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    #[cfg(feature = "toml")]
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        Ok(config)
    }

    #[cfg(feature = "toml")]
    pub fn from_toml_str(content: &str) -> crate::Result<Self> {
        toml::from_str(content).map_err(|e| crate::CoreError::Config(e.to_string()))
    }

    pub fn default_config() -> Self {
        Self {
            aggregation: AggregationConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}
