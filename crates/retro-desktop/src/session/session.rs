//! Logged-in user state.
//!
//! The session is the only state that survives a page reload. It holds a
//! username mirrored to the store under a single key.

use super::store::SessionStore;
use crate::error::{DesktopError, DesktopResult};

/// Logged-in user, mirrored to a [`SessionStore`]
#[derive(Clone, Debug)]
pub struct Session {
    key: String,
    username: Option<String>,
}

impl Session {
    /// Create a logged-out session persisted under `key`
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            username: None,
        }
    }

    /// Storage key
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.username.is_some()
    }

    /// Pick up a user saved by a previous visit, skipping the login screen.
    ///
    /// A blank stored value counts as logged out.
    pub fn restore(&mut self, store: &dyn SessionStore) -> DesktopResult<bool> {
        self.username = store
            .load(&self.key)?
            .filter(|name| !name.trim().is_empty());
        if let Some(name) = &self.username {
            tracing::debug!(username = %name, "session restored");
        }
        Ok(self.username.is_some())
    }

    /// Log in as `username` (surrounding whitespace is dropped).
    pub fn login(&mut self, store: &dyn SessionStore, username: &str) -> DesktopResult<()> {
        let name = username.trim();
        if name.is_empty() {
            return Err(DesktopError::EmptyUsername);
        }
        store.save(&self.key, name)?;
        tracing::debug!(username = %name, "logged in");
        self.username = Some(name.to_string());
        Ok(())
    }

    /// Log out and forget the stored user
    pub fn logout(&mut self, store: &dyn SessionStore) -> DesktopResult<()> {
        store.remove(&self.key)?;
        if let Some(name) = self.username.take() {
            tracing::debug!(username = %name, "logged out");
        }
        Ok(())
    }
}
