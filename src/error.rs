//! Error handling for quotelog
//!
//! Defines the extraction error taxonomy and establishes a unified Result
//! type using anyhow for context chaining and error propagation.

use thiserror::Error;

/// Failures while locating the quote inside a fetched page body.
///
/// Both variants mean the page markup did not match expectations. They are
/// distinct from transport failures, which are handled by the fetcher and
/// never reach the extractor.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractError {
    /// No line of the body contained the price marker.
    #[error("price marker not found in page body")]
    MarkerNotFound,

    /// The marker line had no usable closing tag after the marker.
    #[error("malformed price fragment: no closing tag after marker")]
    MalformedFragment,
}

/// Result type alias for quote operations
pub type Result<T> = anyhow::Result<T>;
