//! Content-addressable result cache.
//!
//! Conversion results are stored under a key derived from the input
//! content itself. The store is a capability interface, so the
//! filesystem backend and the in-memory backend interchange without
//! touching the conversion orchestrator.

mod fs;
mod key;
mod memory;

pub use fs::FsCacheStore;
pub use key::{cache_key, KEY_PREFIX};
pub use memory::MemoryCacheStore;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A cached conversion result.
///
/// Entries are created on first conversion of a key and replaced
/// wholesale on later conversions; nothing in this layer expires them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheEntry {
    /// The converted LaTeX document
    pub content: String,

    /// Creation time, seconds since the Unix epoch
    pub timestamp: i64,
}

impl CacheEntry {
    /// Create an entry stamped with the current time.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            timestamp: Utc::now().timestamp(),
        }
    }
}

/// Capability interface for cache persistence.
pub trait CacheStore: Send + Sync {
    /// Look up an entry. A missing key is `Ok(None)`, not an error;
    /// only I/O faults produce `Err`.
    fn get(&self, key: &str) -> Result<Option<CacheEntry>>;

    /// Persist an entry for `key`, replacing any previous one. A
    /// concurrent reader never observes a partially written entry.
    fn set(&self, key: &str, content: &str) -> Result<()>;
}
