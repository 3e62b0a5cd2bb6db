//! Configuration loading for the HR console.
//!
//! This module loads the console configuration from a YAML file: company
//! and currency used in reports, storage and report directories, an
//! optional seed dataset, the HTTP listener, logging, and the admin
//! credential.
//!
//! # Example
//!
//! ```no_run
//! use hr_console::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/console.yaml").unwrap();
//! println!("Serving on port {}", loader.config().server.port);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{AdminConfig, ConsoleConfig, LoggingConfig, ServerConfig};
