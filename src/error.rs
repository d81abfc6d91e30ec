//! Error types for the mdtex library.

use std::io;
use thiserror::Error;

/// Result type alias for mdtex operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during Markdown to LaTeX conversion.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input document is missing or empty.
    ///
    /// Rejected before any rendering or cache access happens.
    #[error("Input document is missing or empty")]
    EmptyInput,

    /// The structural Markdown parser could not interpret the input.
    #[error("Markdown parsing error: {0}")]
    Parse(String),

    /// The cache store's underlying I/O failed.
    ///
    /// A missing key is not a storage error; it is reported as an
    /// ordinary cache miss.
    #[error("Cache storage error: {0}")]
    Storage(String),

    /// A failure during chunked processing or rendering, wrapping the
    /// originating cause.
    #[error("Conversion failed: {0}")]
    Conversion(#[source] Box<Error>),
}

impl Error {
    /// Wrap an error as a conversion failure, preserving the cause.
    pub fn conversion(cause: Error) -> Self {
        Error::Conversion(Box::new(cause))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Storage(err.to_string())
    }
}
