//! Core type definitions for the desktop shell
//!
//! This module centralizes identifier types used throughout the crate
//! for consistency and discoverability.

use serde::{Deserialize, Serialize};

/// Unique window identifier
///
/// Window IDs are chosen by the caller when registering a descriptor
/// (e.g. `"trainer"`, `"help"`) and stay stable for as long as the
/// window is open. The crate never inspects their contents.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowId(String);

impl WindowId {
    /// Create an identifier from any string-like value
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for WindowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WindowId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for WindowId {
    fn from(id: String) -> Self {
        Self(id)
    }
}
