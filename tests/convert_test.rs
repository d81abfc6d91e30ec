//! Integration tests for the conversion orchestrator and cache.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use mdtex::error::{Error, Result};
use mdtex::{CacheEntry, CacheStore, ConvertOptions, Converter, FsCacheStore, MemoryCacheStore};

/// Store wrapper counting accesses, for observing orchestrator behavior.
#[derive(Default)]
struct CountingStore {
    inner: MemoryCacheStore,
    gets: AtomicUsize,
    sets: AtomicUsize,
}

struct Shared(Arc<CountingStore>);

impl CacheStore for Shared {
    fn get(&self, key: &str) -> Result<Option<CacheEntry>> {
        self.0.gets.fetch_add(1, Ordering::SeqCst);
        self.0.inner.get(key)
    }

    fn set(&self, key: &str, content: &str) -> Result<()> {
        self.0.sets.fetch_add(1, Ordering::SeqCst);
        self.0.inner.set(key, content)
    }
}

/// Store whose reads always fail, for the degraded-read path.
struct FailingReadStore(MemoryCacheStore);

impl CacheStore for FailingReadStore {
    fn get(&self, _key: &str) -> Result<Option<CacheEntry>> {
        Err(Error::Storage("simulated read fault".to_string()))
    }

    fn set(&self, key: &str, content: &str) -> Result<()> {
        self.0.set(key, content)
    }
}

/// Store whose writes always fail, for the degraded-write path.
struct FailingWriteStore(MemoryCacheStore);

impl CacheStore for FailingWriteStore {
    fn get(&self, key: &str) -> Result<Option<CacheEntry>> {
        self.0.get(key)
    }

    fn set(&self, _key: &str, _content: &str) -> Result<()> {
        Err(Error::Storage("simulated write fault".to_string()))
    }
}

#[test]
fn test_second_conversion_served_from_cache() {
    let counting = Arc::new(CountingStore::default());
    let converter = Converter::new().with_store(Box::new(Shared(counting.clone())));

    let first = converter.convert("# Hello\n\nworld").unwrap();
    let second = converter.convert("# Hello\n\nworld").unwrap();

    assert_eq!(first, second);
    assert_eq!(counting.gets.load(Ordering::SeqCst), 2);
    // Only the first conversion rendered and wrote
    assert_eq!(counting.sets.load(Ordering::SeqCst), 1);
}

#[test]
fn test_stored_entry_matches_returned_document() {
    let store = Arc::new(CountingStore::default());
    let converter = Converter::new().with_store(Box::new(Shared(store.clone())));

    let latex = converter.convert("# X").unwrap();
    let key = mdtex::cache_key("# X");
    let entry = store.inner.get(&key).unwrap().unwrap();
    assert_eq!(entry.content, latex);
}

#[test]
fn test_timestamp_non_decreasing_across_overwrites() {
    let store = MemoryCacheStore::new();
    store.set("md-k", "one").unwrap();
    let first = store.get("md-k").unwrap().unwrap();
    store.set("md-k", "two").unwrap();
    let second = store.get("md-k").unwrap().unwrap();
    assert!(second.timestamp >= first.timestamp);
}

#[test]
fn test_empty_input_touches_no_store() {
    let counting = Arc::new(CountingStore::default());
    let converter = Converter::new().with_store(Box::new(Shared(counting.clone())));

    let result = converter.convert("");
    assert!(matches!(result, Err(Error::EmptyInput)));
    assert_eq!(counting.gets.load(Ordering::SeqCst), 0);
    assert_eq!(counting.sets.load(Ordering::SeqCst), 0);
}

#[test]
fn test_read_fault_degrades_to_full_computation() {
    let converter = Converter::new().with_store(Box::new(FailingReadStore(MemoryCacheStore::new())));

    let latex = converter.convert("# Still works").unwrap();
    assert!(latex.contains("\\section{Still works}"));
}

#[test]
fn test_write_fault_still_returns_document() {
    let converter =
        Converter::new().with_store(Box::new(FailingWriteStore(MemoryCacheStore::new())));

    let latex = converter.convert("# Still returned").unwrap();
    assert!(latex.contains("\\section{Still returned}"));
}

#[test]
fn test_fs_cache_persists_entries() {
    let dir = tempfile::tempdir().unwrap();
    let converter = Converter::new().with_fs_cache(dir.path()).unwrap();

    let latex = converter.convert("# Persisted\n\nbody").unwrap();

    let key = mdtex::cache_key("# Persisted\n\nbody");
    let store = FsCacheStore::new(dir.path()).unwrap();
    let entry = store.get(&key).unwrap().unwrap();
    assert_eq!(entry.content, latex);
    assert!(dir.path().join(format!("{key}.json")).exists());
}

#[test]
fn test_fs_cache_hit_across_converter_instances() {
    let dir = tempfile::tempdir().unwrap();

    let first = Converter::new()
        .with_fs_cache(dir.path())
        .unwrap()
        .convert("# Shared")
        .unwrap();
    let second = Converter::new()
        .with_fs_cache(dir.path())
        .unwrap()
        .convert("# Shared")
        .unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_different_content_gets_different_entries() {
    let store = Arc::new(CountingStore::default());
    let converter = Converter::new().with_store(Box::new(Shared(store.clone())));

    converter.convert("# One").unwrap();
    converter.convert("# Two").unwrap();
    assert_eq!(store.inner.len(), 2);
}

#[test]
fn test_options_flow_through_conversion() {
    let options = ConvertOptions::new().with_render_options(
        mdtex::RenderOptions::new()
            .with_title("Report")
            .with_heading_command(1, "chapter"),
    );
    let latex = Converter::new()
        .with_options(options)
        .convert("# Intro")
        .unwrap();

    assert!(latex.contains("\\title{Report}"));
    assert!(latex.contains("\\chapter{Intro}"));
}
