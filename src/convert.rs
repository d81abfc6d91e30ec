//! Conversion orchestration: cache lookup, chunked rendering, wrapping.

use std::path::PathBuf;

use crate::cache::{cache_key, CacheStore, FsCacheStore};
use crate::chunk::{self, DEFAULT_CHUNK_THRESHOLD};
use crate::error::{Error, Result};
use crate::render::{wrap_document, RenderOptions};

/// Options for document conversion.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Rendering options
    pub render: RenderOptions,

    /// Character count above which the document is chunked at section
    /// boundaries
    pub chunk_threshold: usize,
}

impl ConvertOptions {
    /// Create new conversion options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set rendering options.
    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render = options;
        self
    }

    /// Set the chunking threshold in characters.
    pub fn with_chunk_threshold(mut self, threshold: usize) -> Self {
        self.chunk_threshold = threshold;
        self
    }
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            render: RenderOptions::default(),
            chunk_threshold: DEFAULT_CHUNK_THRESHOLD,
        }
    }
}

/// Markdown to LaTeX converter.
///
/// Composes the conversion pipeline: cache lookup, then on a miss the
/// chunked render and document wrap, then a cache write. Conversions
/// are independent, self-contained computations; the cache store is
/// the only shared state.
pub struct Converter {
    options: ConvertOptions,
    store: Option<Box<dyn CacheStore>>,
}

impl Converter {
    /// Create a converter with default options and no cache.
    pub fn new() -> Self {
        Self {
            options: ConvertOptions::default(),
            store: None,
        }
    }

    /// Set conversion options.
    pub fn with_options(mut self, options: ConvertOptions) -> Self {
        self.options = options;
        self
    }

    /// Attach a cache store.
    pub fn with_store(mut self, store: Box<dyn CacheStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Attach a filesystem cache rooted at `dir`.
    pub fn with_fs_cache(self, dir: impl Into<PathBuf>) -> Result<Self> {
        let store = FsCacheStore::new(dir)?;
        Ok(self.with_store(Box::new(store)))
    }

    /// Convert a Markdown document to a complete LaTeX document.
    ///
    /// Empty input is rejected before any cache access. A cache read
    /// fault degrades to a miss; a cache write fault is logged and the
    /// freshly computed document is still returned.
    pub fn convert(&self, content: &str) -> Result<String> {
        if content.is_empty() {
            return Err(Error::EmptyInput);
        }

        let key = cache_key(content);

        if let Some(store) = &self.store {
            match store.get(&key) {
                Ok(Some(entry)) => {
                    log::debug!("cache hit for {key}");
                    return Ok(entry.content);
                }
                Ok(None) => {}
                Err(e) => {
                    log::warn!("cache read failed for {key}, rendering instead: {e}");
                }
            }
        }

        let body = chunk::render_chunked(
            content,
            &self.options.render,
            self.options.chunk_threshold,
        )
        .map_err(Error::conversion)?;
        let latex = wrap_document(&body, &self.options.render);

        if let Some(store) = &self.store {
            if let Err(e) = store.set(&key, &latex) {
                log::warn!("cache write failed for {key}: {e}");
            }
        }

        Ok(latex)
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}
