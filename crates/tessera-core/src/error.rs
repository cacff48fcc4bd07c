//! Error types for tessera-core operations.
//!
//! Color math in Tessera is total over its documented domain, so errors only
//! appear at the edges: parsing text into colors or formulas, indexing into a
//! palette, and reading palette files.
//!
//! # Usage
//!
//! ```rust
//! use tessera_core::{Error, Result};
//!
//! fn channel(text: &str) -> Result<u8> {
//!     text.parse::<u8>()
//!         .map_err(|e| Error::parse(text, e.to_string()))
//! }
//!
//! assert!(channel("300").is_err());
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation
//!
//! # Used By
//!
//! - [`crate::pixel`] - Color parsing
//! - `tessera-delta` - Formula parsing, palette bookkeeping
//! - `tessera-cli` - Wrapped into `anyhow` errors

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in Tessera.
///
/// # Categories
///
/// - **Parse errors**: [`Parse`](Error::Parse), [`UnknownFormula`](Error::UnknownFormula)
/// - **Collection errors**: [`IndexOutOfRange`](Error::IndexOutOfRange)
/// - **I/O errors**: [`Io`](Error::Io)
#[derive(Debug, Error)]
pub enum Error {
    /// Text could not be parsed into a color or number.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tessera_core::Error;
    ///
    /// let err = Error::parse("#12345", "expected 6 or 8 hex digits");
    /// assert!(err.to_string().contains("#12345"));
    /// ```
    #[error("cannot parse '{input}': {reason}")]
    Parse {
        /// The offending input text
        input: String,
        /// What was wrong with it
        reason: String,
    },

    /// Delta E formula name is not recognised.
    #[error("unknown delta E formula: {0}")]
    UnknownFormula(String),

    /// Index is past the end of a collection.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Collection length
        len: usize,
    },

    /// I/O error while reading color lists.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Creates an [`Error::Parse`] error.
    #[inline]
    pub fn parse(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Parse {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::IndexOutOfRange`] error.
    #[inline]
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    /// Returns `true` if this is a parse-related error.
    #[inline]
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::Parse { .. } | Self::UnknownFormula(_))
    }

    /// Returns `true` if this is an I/O error.
    #[inline]
    pub fn is_io_error(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}
