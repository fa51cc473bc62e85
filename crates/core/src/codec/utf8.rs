//! UTF-8 validation and decoding.
//!
//! Uses the historical lead byte table that still admits the 5- and
//! 6-byte forms from the original UTF-8 definition. Gateway clients
//! produced such sequences and the contract here is to count and bound
//! them consistently, not to police RFC 3629. This is why validation is
//! not delegated to `std::str`.

use crate::error::{CharsetError, Result};

/// Number of continuation bytes implied by a lead byte, or `None` when
/// the byte cannot start a sequence (continuation bytes, 0xFE, 0xFF).
pub(crate) fn continuation_count(lead: u8) -> Option<usize> {
    match lead {
        0x00..=0x7F => Some(0),
        0x80..=0xBF => None,
        0xC0..=0xDF => Some(1),
        0xE0..=0xEF => Some(2),
        0xF0..=0xF7 => Some(3),
        0xF8..=0xFB => Some(4),
        0xFC..=0xFD => Some(5),
        0xFE..=0xFF => None,
    }
}

fn is_continuation(byte: u8) -> bool {
    (0x80..=0xBF).contains(&byte)
}

/// Check whether `bytes` is entirely made of well-formed UTF-8 sequences.
///
/// A lone continuation byte, a 0xFE/0xFF byte, a continuation byte out
/// of range, or a sequence cut off by the end of the buffer all fail.
pub fn is_valid_utf8(bytes: &[u8]) -> bool {
    let mut idx = 0;
    while idx < bytes.len() {
        let Some(count) = continuation_count(bytes[idx]) else {
            return false;
        };
        if count >= bytes.len() - idx {
            return false;
        }
        let mut offset = 1;
        while offset <= count {
            if !is_continuation(bytes[idx + offset]) {
                return false;
            }
            offset += 1;
        }
        idx += count + 1;
    }
    true
}

/// Decode exactly one code point from the front of `bytes`.
///
/// Returns the code point and the number of bytes consumed. A malformed
/// byte poisons only this call; the caller may resume at any boundary
/// it chooses.
///
/// # Errors
///
/// `Malformed` for a byte that cannot appear at its position,
/// `Truncated` when the buffer ends before the sequence is complete.
pub fn decode_one(bytes: &[u8]) -> Result<(u32, usize)> {
    let Some(&lead) = bytes.first() else {
        return Err(CharsetError::Truncated { pos: 0 });
    };
    let Some(count) = continuation_count(lead) else {
        return Err(CharsetError::Malformed { pos: 0 });
    };
    if count == 0 {
        return Ok((u32::from(lead), 1));
    }
    if bytes.len() <= count {
        return Err(CharsetError::Truncated { pos: bytes.len() });
    }
    // The payload bits of the lead byte shrink by one per extra
    // continuation byte: 110xxxxx, 1110xxxx, 11110xxx, ...
    let mut code_point = u32::from(lead) & (0x3F >> count);
    for (offset, &byte) in bytes[1..=count].iter().enumerate() {
        if !is_continuation(byte) {
            return Err(CharsetError::Malformed { pos: offset + 1 });
        }
        code_point = (code_point << 6) | (u32::from(byte) & 0x3F);
    }
    Ok((code_point, count + 1))
}
