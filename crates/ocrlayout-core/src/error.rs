//! Error types for ocrlayout-rs.
//!
//! The layout algorithms themselves are total functions and never produce
//! errors; [`OcrError`] covers the document/rasterization/recognition
//! boundary. The top-level extraction API erases these to an empty result —
//! the variants exist so callers below that boundary can log and assert on
//! the failure kind.

use std::fmt;

/// Failure kinds at the document and recognition boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum OcrError {
    /// The document source could not be opened or parsed at all.
    /// Fatal for the whole document.
    DocumentOpen(String),
    /// A single page could not be rasterized. Recovered as an empty page.
    Render { page: usize, reason: String },
    /// The recognition engine failed on a single page. Recovered as an
    /// empty page.
    Recognition { page: usize, reason: String },
    /// I/O error reading source data.
    Io(String),
}

impl fmt::Display for OcrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OcrError::DocumentOpen(msg) => write!(f, "cannot open document: {msg}"),
            OcrError::Render { page, reason } => {
                write!(f, "cannot rasterize page {page}: {reason}")
            }
            OcrError::Recognition { page, reason } => {
                write!(f, "recognition failed on page {page}: {reason}")
            }
            OcrError::Io(msg) => write!(f, "I/O error: {msg}"),
        }
    }
}

impl std::error::Error for OcrError {}

impl From<std::io::Error> for OcrError {
    fn from(err: std::io::Error) -> Self {
        OcrError::Io(err.to_string())
    }
}
