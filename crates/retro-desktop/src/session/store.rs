//! Storage trait for session persistence.

use crate::error::DesktopResult;

/// Key-value storage backing the session
///
/// Implemented by [`MemoryStore`](super::MemoryStore) for native use and
/// tests, and by `LocalStorageStore` in the browser.
pub trait SessionStore {
    /// Read the value under `key`, `None` if absent.
    fn load(&self, key: &str) -> DesktopResult<Option<String>>;

    /// Write `value` under `key`, replacing any previous value.
    fn save(&self, key: &str, value: &str) -> DesktopResult<()>;

    /// Delete `key`. Deleting an absent key is not an error.
    fn remove(&self, key: &str) -> DesktopResult<()>;
}
