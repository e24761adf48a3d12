//! Error types for dimension extraction.
//!
//! Only document-level failures are errors. A page with no recognizable text,
//! a line that matches no pattern, or a degenerate span box are all handled
//! as ordinary (empty) outcomes.

use std::path::PathBuf;

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while extracting dimensions.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The document could not be opened or is not a valid PDF
    #[error("Failed to open '{}': {source}", path.display())]
    DocumentOpen {
        /// Path that was requested
        path: PathBuf,
        /// Underlying parser failure
        #[source]
        source: pdf_oxide::Error,
    },

    /// Text or geometry extraction failed for a single page
    #[error("Failed to read page {page}: {source}")]
    Page {
        /// Zero-based page index
        page: usize,
        /// Underlying parser failure
        #[source]
        source: pdf_oxide::Error,
    },

    /// Page index outside the document
    #[error("Page {page} out of range (document has {count} pages)")]
    PageOutOfRange {
        /// Requested page index
        page: usize,
        /// Number of pages available
        count: usize,
    },

    /// A pattern supplied through configuration failed to compile
    #[error("Invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The offending pattern source
        pattern: String,
        /// Compilation failure
        #[source]
        source: regex::Error,
    },

    /// Configuration could not be parsed
    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
