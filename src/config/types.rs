//! Configuration types for the HR console.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file. Every section has
//! defaults, so an empty file is a valid configuration.

use std::path::PathBuf;

use serde::Deserialize;

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// An `EnvFilter` directive such as `info` or `hr_console=debug`.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// The single admin credential.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AdminConfig {
    /// Admin username.
    pub username: String,
    /// Admin password.
    pub password: String,
    /// Role recorded in the session on login.
    pub role: String,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            username: "Admin".to_string(),
            password: "admin123".to_string(),
            role: "Admin".to_string(),
        }
    }
}

/// The complete console configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Company name printed on payslips and reports.
    pub company_name: String,
    /// Currency symbol prefixed to amounts in reports.
    pub currency_symbol: String,
    /// Directory holding the persisted collections.
    pub storage_dir: PathBuf,
    /// Directory generated documents are written to.
    pub report_dir: PathBuf,
    /// Optional seed dataset replacing the built-in one.
    pub seed_path: Option<PathBuf>,
    /// HTTP listener settings.
    pub server: ServerConfig,
    /// Log output settings.
    pub logging: LoggingConfig,
    /// Admin credential.
    pub admin: AdminConfig,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            company_name: "ModernTech Solutions".to_string(),
            currency_symbol: "R".to_string(),
            storage_dir: PathBuf::from("./data/store"),
            report_dir: PathBuf::from("./reports"),
            seed_path: None,
            server: ServerConfig::default(),
            logging: LoggingConfig::default(),
            admin: AdminConfig::default(),
        }
    }
}
