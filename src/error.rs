//! Error types for docreflow library.

use std::io;
use thiserror::Error;

/// Result type alias for docreflow operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while restructuring a document.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// An ordered-list marker that matches no known numbering style.
    #[error("Unknown list type: {0}")]
    UnknownListMarker(String),

    /// The same footnote index appears twice in the trailing footnote list.
    #[error("Duplicate footnote: {0}")]
    DuplicateFootnote(u32),

    /// An image line without a usable `src` attribute.
    #[error("Malformed image: {0}")]
    MalformedImage(String),

    /// Metadata serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// No converter is registered for the input.
    #[error("Unsupported input format: {0}")]
    UnsupportedFormat(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}
