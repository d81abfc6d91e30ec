//! # mdtex
//!
//! Deterministic Markdown to LaTeX conversion for Rust.
//!
//! This library walks a structural Markdown parse and emits LaTeX
//! fragments rule by rule, wraps the result into a compilable
//! `article` document, and caches converted documents under a key
//! derived from the input content itself.
//!
//! ## Quick Start
//!
//! ```
//! use mdtex::to_latex;
//!
//! fn main() -> mdtex::Result<()> {
//!     let latex = to_latex("# Hello\n\nSome *markdown* text.")?;
//!     assert!(latex.contains("\\section{Hello}"));
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Rule-based rendering**: one LaTeX emission rule per Markdown
//!   node kind, with escaping at leaf text only
//! - **Math passthrough**: `$…$` and `$$…$$` spans survive the
//!   structural parse verbatim
//! - **Chunked processing**: oversized documents split at section
//!   boundaries to bound per-call rendering cost
//! - **Content-addressable cache**: repeat conversions of identical
//!   input are served from the store
//!
//! ## Caching
//!
//! ```no_run
//! use mdtex::{ConvertOptions, Converter};
//!
//! fn main() -> mdtex::Result<()> {
//!     let converter = Converter::new()
//!         .with_options(ConvertOptions::default())
//!         .with_fs_cache("./.mdtex-cache")?;
//!
//!     let latex = converter.convert("# Report\n\nbody text")?;
//!     println!("{latex}");
//!     Ok(())
//! }
//! ```

pub mod cache;
pub mod chunk;
pub mod convert;
pub mod error;
pub mod escape;
pub mod math;
pub mod render;

// Re-export commonly used types
pub use cache::{cache_key, CacheEntry, CacheStore, FsCacheStore, MemoryCacheStore};
pub use convert::{ConvertOptions, Converter};
pub use error::{Error, Result};
pub use render::{to_latex_body, LatexRenderer, RenderOptions};

use std::path::Path;

/// Convert a Markdown string to a complete LaTeX document.
///
/// One-shot conversion with default options and no cache.
///
/// # Example
///
/// ```
/// let latex = mdtex::to_latex("*hi*").unwrap();
/// assert!(latex.contains("\\textit{hi}"));
/// ```
pub fn to_latex(markdown: &str) -> Result<String> {
    Converter::new().convert(markdown)
}

/// Convert a Markdown string with custom options.
pub fn to_latex_with_options(markdown: &str, options: &ConvertOptions) -> Result<String> {
    Converter::new()
        .with_options(options.clone())
        .convert(markdown)
}

/// Convert a Markdown file to a complete LaTeX document.
///
/// # Example
///
/// ```no_run
/// let latex = mdtex::convert_file("notes.md").unwrap();
/// std::fs::write("notes.tex", latex).unwrap();
/// ```
pub fn convert_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let content = std::fs::read_to_string(path)?;
    to_latex(&content)
}
