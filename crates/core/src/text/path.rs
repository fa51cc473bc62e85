//! Path delimiter location and boundary-safe truncation.
//!
//! A Shift-JIS trail byte can equal 0x5C, so a raw backwards scan for
//! `\` would split a two-byte character and hand back a bogus path
//! component. Charsets with that property are walked forwards instead,
//! consuming whole sequences.

use crate::charset::{US7ASCII, classify};
use crate::text::count::{count_chars, sequence_len};
use crate::text::tables::IDENT_BYTES;

/// Offset just past the last `\` or `/` in `path`, or 0 when the path
/// has no delimiter.
pub fn find_last_delimiter(path: &[u8], id: u16) -> usize {
    if classify(id).is_byte_unique() {
        for (idx, &byte) in path.iter().enumerate().rev() {
            if byte == b'\\' || byte == b'/' {
                return idx + 1;
            }
        }
        return 0;
    }
    find_last_delimiter_forward(path, id)
}

/// Forward walk for charsets whose trail bytes collide with ASCII:
/// delimiters only count at sequence boundaries.
fn find_last_delimiter_forward(path: &[u8], id: u16) -> usize {
    let mut last = 0;
    let mut idx = 0;
    while idx < path.len() {
        let byte = path[idx];
        if byte == b'\\' || byte == b'/' {
            last = idx + 1;
            idx += 1;
            continue;
        }
        let len = sequence_len(id, byte);
        if len > path.len() - idx {
            break;
        }
        idx += len;
    }
    last
}

/// Conservative safe-identifier prefix of `text`.
///
/// Under US7ASCII every byte is masked to 7 bits first. The result ends
/// at the first byte that is not a valid unquoted identifier byte.
pub fn sanitize_name(text: &[u8], id: u16) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len());
    for &raw in text {
        let byte = if id == US7ASCII { raw & 0x7F } else { raw };
        if !IDENT_BYTES[byte as usize] {
            break;
        }
        out.push(byte);
    }
    out
}

/// Byte length of `text` capped at `max_bytes` without splitting a
/// character.
///
/// When the text runs past the cap, the counter re-derives the last
/// complete character boundary at or below it. A count of zero
/// characters falls back to the raw cap.
pub fn bounded_length(id: u16, text: &[u8], max_bytes: usize) -> usize {
    if text.len() <= max_bytes {
        return text.len();
    }
    let counted = count_chars(id, &text[..max_bytes]);
    if counted.chars == 0 {
        max_bytes
    } else {
        counted.bytes
    }
}
