//! Content error types
//!
//! Unified error handling for content resolution, loading, and parsing.

use thiserror::Error;

use crate::markup::MarkupError;

/// Unified content error type
#[derive(Debug, Error)]
pub enum ContentError {
    /// Identifier is not a valid content path
    #[error("Invalid content identifier: {0}")]
    InvalidId(String),

    /// Backing file does not exist
    #[error("Content not found: {0}")]
    NotFound(String),

    /// Backing file exists but is empty
    #[error("Content is empty: {0}")]
    EmptyContent(String),

    /// Malformed front matter or markup
    #[error("Parse error in {id}: {source}")]
    Parse {
        id: String,
        #[source]
        source: MarkupError,
    },

    /// IO error other than a missing file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for content operations
pub type ContentResult<T> = std::result::Result<T, ContentError>;
