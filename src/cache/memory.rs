//! In-memory cache store.

use std::collections::HashMap;
use std::sync::Mutex;

use super::{CacheEntry, CacheStore};
use crate::error::{Error, Result};

/// Cache store backed by a process-local map.
///
/// Useful for tests and for embedding the converter where no durable
/// storage area is available.
#[derive(Default)]
pub struct MemoryCacheStore {
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl MemoryCacheStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries currently held.
    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    /// Whether the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CacheStore for MemoryCacheStore {
    fn get(&self, key: &str) -> Result<Option<CacheEntry>> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| Error::Storage("cache mutex poisoned".to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, content: &str) -> Result<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| Error::Storage("cache mutex poisoned".to_string()))?;
        entries.insert(key.to_string(), CacheEntry::new(content));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_round_trip() {
        let store = MemoryCacheStore::new();
        store.set("md-k", "latex").unwrap();
        assert_eq!(store.get("md-k").unwrap().unwrap().content, "latex");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_missing_key_is_none() {
        let store = MemoryCacheStore::new();
        assert!(store.get("md-k").unwrap().is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_overwrite() {
        let store = MemoryCacheStore::new();
        store.set("md-k", "one").unwrap();
        store.set("md-k", "two").unwrap();
        assert_eq!(store.get("md-k").unwrap().unwrap().content, "two");
        assert_eq!(store.len(), 1);
    }
}
