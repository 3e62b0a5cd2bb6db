//! Application state for the HR console API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::{Arc, Mutex, MutexGuard};

use chrono::Local;

use crate::auth::{CredentialVerifier, SessionManager};
use crate::config::ConfigLoader;
use crate::error::ConsoleResult;
use crate::report::{ReportContext, ReportWriter};
use crate::storage::{FileStorage, KeyValueStorage};
use crate::store::DataStore;

/// Shared application state.
///
/// The store sits behind a mutex so mutations are applied one at a time.
/// Handlers lock it, do their synchronous work and release it before
/// returning.
#[derive(Clone)]
pub struct AppState {
    store: Arc<Mutex<DataStore>>,
    sessions: Arc<SessionManager>,
    reports: ReportWriter,
    company_name: Arc<str>,
    currency_symbol: Arc<str>,
}

impl AppState {
    /// Creates a state over an already opened store.
    pub fn new(
        store: DataStore,
        sessions: SessionManager,
        reports: ReportWriter,
        company_name: &str,
        currency_symbol: &str,
    ) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            sessions: Arc::new(sessions),
            reports,
            company_name: Arc::from(company_name),
            currency_symbol: Arc::from(currency_symbol),
        }
    }

    /// Builds the state described by a configuration, backed by
    /// file storage in the configured directory.
    pub fn from_config(loader: &ConfigLoader) -> ConsoleResult<Self> {
        let storage: Arc<dyn KeyValueStorage> =
            Arc::new(FileStorage::open(&loader.config().storage_dir)?);
        Self::with_storage(loader, storage)
    }

    /// Builds the state described by a configuration over the given storage.
    pub fn with_storage(
        loader: &ConfigLoader,
        storage: Arc<dyn KeyValueStorage>,
    ) -> ConsoleResult<Self> {
        let config = loader.config();
        let store = DataStore::open(storage.clone(), loader.seed()?)?;
        let verifier: Arc<dyn CredentialVerifier> = Arc::new(loader.credentials());
        let sessions = SessionManager::new(verifier, storage);

        Ok(Self::new(
            store,
            sessions,
            ReportWriter::new(&config.report_dir),
            &config.company_name,
            &config.currency_symbol,
        ))
    }

    /// Locks the store. A poisoned lock is recovered: every mutation
    /// persists before returning, so the in-memory state is still usable.
    pub fn store(&self) -> MutexGuard<'_, DataStore> {
        self.store.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Returns the session manager.
    pub fn sessions(&self) -> &SessionManager {
        &self.sessions
    }

    /// Returns the report writer.
    pub fn reports(&self) -> &ReportWriter {
        &self.reports
    }

    /// A report context stamped with the current local time.
    pub fn report_context(&self) -> ReportContext {
        ReportContext::new(
            self.company_name.as_ref(),
            self.currency_symbol.as_ref(),
            Local::now().naive_local(),
        )
    }
}
