//! Error types for the desktop shell
//!
//! Geometry and focus operations never fail: out-of-range input is clamped
//! or ignored. Errors only arise at the edges of the crate, when looking up
//! catalog entries, validating a login, or talking to session storage.

use crate::types::WindowId;

/// Errors that can occur in desktop shell operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DesktopError {
    /// No descriptor is registered under the given window ID
    WindowNotFound(WindowId),

    /// No desktop icon is registered under the given ID
    IconNotFound(String),

    /// Login was attempted with a blank username
    EmptyUsername,

    /// Session storage backend failed
    Storage(String),

    /// JSON serialization or deserialization failed
    Serialization(String),
}

impl std::fmt::Display for DesktopError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WindowNotFound(id) => write!(f, "window not found: {}", id),
            Self::IconNotFound(id) => write!(f, "desktop icon not found: {}", id),
            Self::EmptyUsername => write!(f, "username must not be empty"),
            Self::Storage(msg) => write!(f, "storage error: {}", msg),
            Self::Serialization(msg) => write!(f, "serialization error: {}", msg),
        }
    }
}

impl std::error::Error for DesktopError {}

impl From<serde_json::Error> for DesktopError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}

/// Result type alias for desktop operations
pub type DesktopResult<T> = Result<T, DesktopError>;
