//! In-memory session store.

use std::cell::RefCell;
use std::collections::BTreeMap;

use super::store::SessionStore;
use crate::error::DesktopResult;

/// BTreeMap-backed store that doesn't persist across processes.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<BTreeMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl SessionStore for MemoryStore {
    fn load(&self, key: &str) -> DesktopResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> DesktopResult<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> DesktopResult<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}
