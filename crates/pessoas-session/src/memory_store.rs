use crate::{KeyValueStore, SessionResult};

use std::collections::BTreeMap;
use std::sync::RwLock;

/// Process-local store. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> SessionResult<Option<String>> {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        Ok(entries.get(key).cloned())
    }

    fn set_all(&self, new_entries: &[(&str, &str)]) -> SessionResult<()> {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        for (key, value) in new_entries {
            entries.insert((*key).to_string(), (*value).to_string());
        }
        Ok(())
    }

    fn remove_all(&self, keys: &[&str]) -> SessionResult<()> {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        for key in keys {
            entries.remove(*key);
        }
        Ok(())
    }
}
