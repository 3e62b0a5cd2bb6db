//! Admin authentication.
//!
//! The rest of the crate depends only on [`CredentialVerifier`]. The shipped
//! implementation, [`StaticCredentials`], checks a single configured
//! username/password pair. A successful login stores a [`Session`] under its
//! own storage key; the absence of that key means nobody is logged in.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use subtle::ConstantTimeEq;
use tracing::{info, warn};

use crate::error::ConsoleResult;
use crate::storage::{KeyValueStorage, SESSION_KEY, load_json, save_json};

/// An authenticated identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// The name the user logged in with.
    pub username: String,
    /// The role granted to the user.
    pub role: String,
}

/// Decides whether a username/password pair is valid.
pub trait CredentialVerifier: Send + Sync {
    /// Returns the identity for valid credentials, or `None`.
    fn verify(&self, username: &str, password: &str) -> Option<Session>;
}

/// Accepts exactly one username/password pair.
///
/// # Example
///
/// ```
/// use hr_console::auth::{CredentialVerifier, StaticCredentials};
///
/// let credentials = StaticCredentials::new("Admin", "admin123", "Admin");
/// assert!(credentials.verify("Admin", "admin123").is_some());
/// assert!(credentials.verify("admin", "admin123").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct StaticCredentials {
    username: String,
    password: String,
    role: String,
}

impl StaticCredentials {
    /// Creates a verifier for the given pair, granting `role` on success.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            role: role.into(),
        }
    }
}

impl CredentialVerifier for StaticCredentials {
    fn verify(&self, username: &str, password: &str) -> Option<Session> {
        let user_ok: bool = self.username.as_bytes().ct_eq(username.as_bytes()).into();
        let pass_ok: bool = self.password.as_bytes().ct_eq(password.as_bytes()).into();

        (user_ok && pass_ok).then(|| Session {
            username: username.to_string(),
            role: self.role.clone(),
        })
    }
}

/// Logs users in and out, persisting the active session.
pub struct SessionManager {
    verifier: Arc<dyn CredentialVerifier>,
    storage: Arc<dyn KeyValueStorage>,
}

impl SessionManager {
    /// Creates a manager checking credentials with `verifier` and keeping the
    /// session in `storage`.
    pub fn new(verifier: Arc<dyn CredentialVerifier>, storage: Arc<dyn KeyValueStorage>) -> Self {
        Self { verifier, storage }
    }

    /// Verifies the credentials and, on success, persists and returns the
    /// session. Invalid credentials return `Ok(None)` and leave any existing
    /// session untouched.
    pub fn login(&self, username: &str, password: &str) -> ConsoleResult<Option<Session>> {
        let Some(session) = self.verifier.verify(username, password) else {
            warn!(username, "Login rejected");
            return Ok(None);
        };

        save_json(self.storage.as_ref(), SESSION_KEY, &session)?;
        info!(username = %session.username, role = %session.role, "Logged in");
        Ok(Some(session))
    }

    /// Clears the persisted session.
    pub fn logout(&self) -> ConsoleResult<()> {
        self.storage.remove(SESSION_KEY)?;
        info!("Logged out");
        Ok(())
    }

    /// Returns the persisted session, if any.
    pub fn current(&self) -> ConsoleResult<Option<Session>> {
        load_json(self.storage.as_ref(), SESSION_KEY)
    }

    /// Returns true if a session is persisted.
    pub fn is_authenticated(&self) -> ConsoleResult<bool> {
        Ok(self.current()?.is_some())
    }
}
