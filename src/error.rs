//! Error types for the nearword library.
//!
//! All fallible operations in the crate return [`Result`], whose error
//! type is the [`NearwordError`] enum defined here. Every error is
//! detected synchronously at the offending call and is recoverable by
//! the caller; a word being absent from the lexicon is never an error.
//!
//! # Examples
//!
//! ```
//! use nearword::error::{NearwordError, Result};
//!
//! fn rejects() -> Result<()> {
//!     Err(NearwordError::invalid_parameter("max_suggestions must be at least 1"))
//! }
//!
//! assert!(rejects().is_err());
//! ```

use std::io;

use thiserror::Error;

/// The main error type for nearword operations.
#[derive(Error, Debug)]
pub enum NearwordError {
    /// I/O errors while reading a word list.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The query word was empty.
    #[error("query word is empty")]
    EmptyQuery,

    /// A caller-supplied parameter was out of contract.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for operations that may fail with [`NearwordError`].
pub type Result<T> = std::result::Result<T, NearwordError>;

impl NearwordError {
    /// Create a new invalid parameter error.
    pub fn invalid_parameter<S: Into<String>>(msg: S) -> Self {
        NearwordError::InvalidParameter(msg.into())
    }
}
