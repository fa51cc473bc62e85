//! sucre - Charset-aware byte string handling for database gateway text.
//!
//! Byte strings arriving over HTTP may be encoded in legacy multibyte
//! character sets (Shift-JIS variants, Big5, GBK, EUC variants, UTF-8, or
//! single-byte code pages) identified by a numeric charset id. This crate
//! classifies, validates, counts, truncates and sanitizes such strings
//! without ever splitting a multibyte character, using small table-driven
//! heuristics per charset id rather than a full Unicode library.

pub mod charset;
pub mod codec;
pub mod error;
pub mod text;

// Re-export the catalog and classification at the crate root
pub use charset::catalog;
pub use charset::{CharsetClass, classify};

// Re-export codec modules for convenience
pub use codec::latin1;
pub use codec::utf8;

// Re-export sanitization entry points
pub use text::count::{CharCount, count_chars};
pub use text::header::sanitize_header;
pub use text::ident::quote_identifier;
pub use text::path::{bounded_length, find_last_delimiter, sanitize_name};

pub use error::{CharsetError, Result};
