//! The fixed dataset a fresh store starts from.
//!
//! When a collection has never been persisted, the data store takes it from
//! a [`SeedData`]. The built-in dataset is embedded in the binary; a
//! deployment can point `seed_path` in the configuration at its own file.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{ConsoleError, ConsoleResult};
use crate::models::{AttendanceRecord, Employee, PayrollRecord};

const BUILTIN_SEED: &str = include_str!("../data/seed.yaml");

/// Initial contents for the three store collections.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SeedData {
    /// Initial employees.
    pub employees: Vec<Employee>,
    /// Initial attendance records, one per employee.
    pub attendance: Vec<AttendanceRecord>,
    /// Initial payroll records, one per employee.
    pub payroll: Vec<PayrollRecord>,
}

impl SeedData {
    /// Parses the embedded dataset.
    pub fn builtin() -> ConsoleResult<Self> {
        Self::parse(BUILTIN_SEED, "built-in")
    }

    /// Loads a dataset from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> ConsoleResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();
        let content = fs::read_to_string(path).map_err(|_| ConsoleError::ConfigNotFound {
            path: path_str.clone(),
        })?;
        Self::parse(&content, &path_str)
    }

    /// An empty dataset: a store seeded from it starts with no records.
    pub fn empty() -> Self {
        Self::default()
    }

    fn parse(content: &str, source_name: &str) -> ConsoleResult<Self> {
        serde_yaml::from_str(content).map_err(|e| ConsoleError::SeedParse {
            source_name: source_name.to_string(),
            message: e.to_string(),
        })
    }
}
