//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the console
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::auth::StaticCredentials;
use crate::error::{ConsoleError, ConsoleResult};
use crate::seed::SeedData;

use super::types::ConsoleConfig;

/// Loads and provides access to the console configuration.
///
/// # Example
///
/// ```no_run
/// use hr_console::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/console.yaml")?;
/// println!("Company: {}", loader.config().company_name);
/// # Ok::<(), hr_console::error::ConsoleError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: ConsoleConfig,
}

impl ConfigLoader {
    /// Loads configuration from the YAML file at `path`.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML or unknown value types (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> ConsoleResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| ConsoleError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::from_yaml(&content, &path_str)
    }

    /// Parses configuration from YAML text; `origin` names it in errors.
    pub fn from_yaml(content: &str, origin: &str) -> ConsoleResult<Self> {
        // An empty document deserializes as unit, not as an empty mapping.
        if content.trim().is_empty() {
            return Ok(Self::from_config(ConsoleConfig::default()));
        }

        let config = serde_yaml::from_str(content).map_err(|e| ConsoleError::ConfigParseError {
            path: origin.to_string(),
            message: e.to_string(),
        })?;
        Ok(Self::from_config(config))
    }

    /// Wraps an already built configuration.
    pub fn from_config(config: ConsoleConfig) -> Self {
        Self { config }
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    /// Returns the seed dataset: the configured file, or the built-in one.
    pub fn seed(&self) -> ConsoleResult<SeedData> {
        match &self.config.seed_path {
            Some(path) => SeedData::load(path),
            None => SeedData::builtin(),
        }
    }

    /// Returns a credential verifier for the configured admin.
    pub fn credentials(&self) -> StaticCredentials {
        let admin = &self.config.admin;
        StaticCredentials::new(&admin.username, &admin.password, &admin.role)
    }
}
