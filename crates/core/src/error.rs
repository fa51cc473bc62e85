//! Error types for the sucre charset library.

use thiserror::Error;

/// Primary error type for charset operations.
///
/// Most routines in this crate degrade silently on bad input; only name
/// resolution and single code point decoding surface errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CharsetError {
    #[error("charset not found: {0}")]
    NotFound(String),

    #[error("malformed byte sequence at offset {pos}")]
    Malformed { pos: usize },

    #[error("truncated multibyte sequence at offset {pos}")]
    Truncated { pos: usize },
}

/// Convenience Result type alias for CharsetError.
pub type Result<T> = std::result::Result<T, CharsetError>;
