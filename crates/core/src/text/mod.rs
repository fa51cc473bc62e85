//! Byte-string counting and sanitization over legacy charsets.
//!
//! This module contains:
//! - `tables`: the shared unquoted-identifier byte table
//! - `count`: complete-character counting per charset id
//! - `path`: delimiter location and boundary-safe truncation
//! - `header`: HTTP header value scrubbing
//! - `ident`: SQL identifier quoting

pub mod count;
pub mod header;
pub mod ident;
pub mod path;
pub mod tables;

// Re-export main functions for convenience
pub use count::{CharCount, count_chars, sequence_len};
pub use header::sanitize_header;
pub use ident::quote_identifier;
pub use path::{bounded_length, find_last_delimiter, sanitize_name};
pub use tables::IDENT_BYTES;
