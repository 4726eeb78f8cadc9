//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading scheduler
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::SchedulerConfig;

/// Loads and provides access to scheduler configuration.
///
/// # Example
///
/// ```no_run
/// use rota_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/scheduler.yaml").unwrap();
/// println!("Minimum wage fallback: {}", loader.config().minimum_wage);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: SchedulerConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Errors
    ///
    /// - [`EngineError::ConfigNotFound`] if the file cannot be read.
    /// - [`EngineError::ConfigParseError`] if the file is not valid YAML or
    ///   contains values of the wrong type.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str,
                message: e.to_string(),
            })?;

        Ok(Self { config })
    }

    /// Builds a loader around an already-constructed configuration.
    pub fn from_config(config: SchedulerConfig) -> Self {
        Self { config }
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::from_config(SchedulerConfig::default())
    }
}
