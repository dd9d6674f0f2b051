//! Engine configuration
//!
//! By default ranked lists are cut at ten entries and communities need at
//! least three members.

use crate::graph::MAX_INITIAL_CAPACITY;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Maximum entries returned by ranked queries
    pub result_limit: usize,
    /// Community threshold used when the caller gives none
    pub default_min_connections: usize,
    /// Pre-allocated node capacity
    pub initial_capacity: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            result_limit: 10,
            default_min_connections: 3,
            initial_capacity: 1024,
        }
    }
}

impl EngineConfig {
    /// Parse a YAML document; missing keys keep their defaults
    pub fn from_yaml_str(yaml: &str) -> ConfigResult<Self> {
        let config: EngineConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a YAML config file
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&text)
    }

    /// Reject settings no query could honour
    pub fn validate(&self) -> ConfigResult<()> {
        if self.result_limit == 0 {
            return Err(ConfigError::Invalid("result_limit must be at least 1".to_string()));
        }
        if self.initial_capacity > MAX_INITIAL_CAPACITY {
            return Err(ConfigError::Invalid(format!(
                "initial_capacity {} exceeds {}",
                self.initial_capacity, MAX_INITIAL_CAPACITY
            )));
        }
        Ok(())
    }
}
