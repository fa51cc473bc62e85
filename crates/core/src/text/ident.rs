//! SQL identifier quoting.

use crate::charset::{CharsetClass, classify};
use crate::text::tables::IDENT_BYTES;

/// Quote `src` as a SQL identifier safe for charset `id`.
///
/// A value made entirely of valid unquoted bytes is returned verbatim.
/// Anything else becomes a double-quoted identifier: `"` and control
/// bytes turn into spaces and ASCII letters are uppercased. Charsets
/// that are not byte-unique (and unknown multibyte charsets) also lose
/// every byte at or above 0x7F, since their sequences cannot be quoted
/// byte-wise without risking an embedded quote character.
pub fn quote_identifier(src: &[u8], id: u16) -> Vec<u8> {
    if src.iter().all(|&b| IDENT_BYTES[b as usize]) {
        return src.to_vec();
    }
    let strip_high = matches!(
        classify(id),
        CharsetClass::MultibyteHeuristic | CharsetClass::Unknown
    );
    let mut out = Vec::with_capacity(src.len() + 2);
    out.push(b'"');
    for &byte in src {
        if byte == b'"' || byte < 0x20 || (strip_high && byte >= 0x7F) {
            out.push(b' ');
        } else {
            out.push(byte.to_ascii_uppercase());
        }
    }
    out.push(b'"');
    out
}
