//! Error types for restyle operations.
//!
//! This module defines the main error type [`RestyleError`] which represents
//! all possible errors that can occur during content extraction, fetching,
//! prompt construction, and generation.
//!
//! # Example
//!
//! ```rust
//! use restyle_core::{RestyleError, Result};
//!
//! fn check_style(style: &str) -> Result<()> {
//!     if style.trim().is_empty() {
//!         return Err(RestyleError::Validation("writing style must not be empty".to_string()));
//!     }
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// Main error type for the rewrite pipeline.
///
/// Every pipeline component surfaces one of these variants to its caller.
/// All failures are terminal for the current invocation; nothing is retried
/// internally and no partial results are produced.
#[derive(Error, Debug)]
pub enum RestyleError {
    /// Input bytes are not valid UTF-8.
    ///
    /// Returned when a plain-text or Markdown upload cannot be decoded.
    #[error("Failed to decode input as UTF-8: {0}")]
    Decode(String),

    /// The declared format cannot be handled.
    ///
    /// Returned for unrecognized file extensions, and for DOCX/PDF inputs
    /// when the corresponding parsing capability was compiled out.
    #[error("Unsupported input format: {0}")]
    UnsupportedFormat(String),

    /// The document container is corrupt or unreadable.
    ///
    /// Returned when a DOCX archive or a PDF page stream cannot be parsed.
    #[error("Malformed document: {0}")]
    MalformedDocument(String),

    /// Fetching a URL failed.
    ///
    /// Covers invalid URLs, network errors, timeouts, and non-2xx responses.
    #[error("Failed to fetch URL: {0}")]
    Fetch(String),

    /// A user-supplied input failed validation.
    ///
    /// Returned for empty style descriptions, empty source text, and
    /// out-of-range generation settings.
    #[error("Invalid input: {0}")]
    Validation(String),

    /// The generation backend rejected the API key.
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// The generation backend reported a rate limit.
    #[error("Rate limit exceeded: {0}")]
    RateLimit(String),

    /// Any other generation backend failure, carrying the raw message.
    #[error("Generation failed: {0}")]
    Generation(String),
}

impl From<url::ParseError> for RestyleError {
    fn from(err: url::ParseError) -> Self {
        RestyleError::Fetch(format!("invalid URL: {}", err))
    }
}

/// Result type alias for RestyleError.
///
/// This is a convenience alias for `std::result::Result<T, RestyleError>`.
pub type Result<T> = std::result::Result<T, RestyleError>;
