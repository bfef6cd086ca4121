use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::{AppStore, StoreError};
use crate::domain::AppData;

/// Serialized snapshots kept in process memory, like a browser's local storage.
///
/// Clones share the same backing map, so a test can keep a handle and inspect
/// what the service wrote.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap_or_else(|e| e.into_inner()).get(key).cloned()
    }
}

impl AppStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<AppData>, StoreError> {
        match self.raw(key) {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    fn save(&self, key: &str, data: &AppData) -> Result<(), StoreError> {
        let json = serde_json::to_string(data)?;
        self.entries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(key.to_string(), json);
        Ok(())
    }
}
