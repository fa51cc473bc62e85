//! Codec modules for UTF-8 handling and legacy re-encoding.
//!
//! This module contains:
//! - `utf8`: UTF-8 validation and single code point decoding
//! - `latin1`: ISO-8859-1 to UTF-8 re-encoding

pub mod latin1;
pub mod utf8;

// Re-export main functions for convenience
pub use latin1::{latin1_to_utf8, latin1_utf8_len};
pub use utf8::{decode_one, is_valid_utf8};
