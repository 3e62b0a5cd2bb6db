//! Durable key-value storage for the HR console.
//!
//! The data store and the session manager persist their state as JSON
//! values under fixed keys. [`KeyValueStorage`] abstracts where those values
//! live: [`FileStorage`] keeps one file per key in a directory, and
//! [`MemoryStorage`] keeps them in a map for tests and ephemeral runs.

mod file;
mod memory;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{ConsoleError, ConsoleResult};

pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Key holding the employees collection.
pub const EMPLOYEES_KEY: &str = "hr_employees";
/// Key holding the attendance collection.
pub const ATTENDANCE_KEY: &str = "hr_attendance";
/// Key holding the payroll collection.
pub const PAYROLL_KEY: &str = "hr_payroll";
/// Key holding the active admin session.
pub const SESSION_KEY: &str = "hr_user";

/// A string-valued key-value store.
///
/// Implementations use interior mutability so a single storage handle can be
/// shared between the data store and the session manager.
pub trait KeyValueStorage: Send + Sync {
    /// Returns the value under `key`, or `None` if the key is absent.
    fn get(&self, key: &str) -> ConsoleResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> ConsoleResult<()>;

    /// Removes `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> ConsoleResult<()>;
}

/// Reads and decodes the JSON value under `key`.
pub fn load_json<T: DeserializeOwned>(
    storage: &dyn KeyValueStorage,
    key: &str,
) -> ConsoleResult<Option<T>> {
    let Some(raw) = storage.get(key)? else {
        return Ok(None);
    };

    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|e| ConsoleError::StorageParse {
            key: key.to_string(),
            message: e.to_string(),
        })
}

/// Encodes `value` as JSON and writes it under `key`.
pub fn save_json<T: Serialize + ?Sized>(
    storage: &dyn KeyValueStorage,
    key: &str,
    value: &T,
) -> ConsoleResult<()> {
    let raw = serde_json::to_string(value).map_err(|e| ConsoleError::StorageWrite {
        key: key.to_string(),
        message: e.to_string(),
    })?;
    storage.set(key, &raw)
}
