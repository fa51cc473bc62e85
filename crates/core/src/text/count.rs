//! Complete-character counting over legacy multibyte charsets.
//!
//! The default multibyte rule is: ASCII bytes stand alone, any other
//! byte starts a two-byte sequence. A handful of charsets deviate for
//! specific lead byte values; those deviations live in one rule table
//! rather than in per-call-site conditionals.

use crate::charset::{CharsetClass, classify};
use crate::codec::utf8;

/// Result of a counting walk: complete characters seen and the bytes
/// they consumed. A trailing partial sequence is in neither number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharCount {
    pub chars: usize,
    pub bytes: usize,
}

/// A per-charset override of the default two-byte sequence rule for a
/// range of lead byte values.
struct LeadRule {
    ids: &'static [u16],
    lo: u8,
    hi: u8,
    len: usize,
}

/// Lead byte exceptions. ZHT32EUC promotes 0x8E to a four-byte
/// sequence and the JA16EUC family promotes 0x8F to three bytes;
/// GB2312, GBK and Big5 demote their 0x80/0xFF boundary bytes to
/// single-byte, and the Shift-JIS family additionally demotes the
/// half-width katakana range 0xA0-0xDF and 0xFD-0xFF.
const LEAD_RULES: &[LeadRule] = &[
    LeadRule { ids: &[860], lo: 0x8E, hi: 0x8E, len: 4 },
    LeadRule { ids: &[830, 831, 837], lo: 0x8F, hi: 0x8F, len: 3 },
    LeadRule { ids: &[850, 852, 865], lo: 0x80, hi: 0x80, len: 1 },
    LeadRule { ids: &[850, 852, 865], lo: 0xFF, hi: 0xFF, len: 1 },
    LeadRule { ids: &[832, 834, 836, 838], lo: 0x80, hi: 0x80, len: 1 },
    LeadRule { ids: &[832, 834, 836, 838], lo: 0xA0, hi: 0xDF, len: 1 },
    LeadRule { ids: &[832, 834, 836, 838], lo: 0xFD, hi: 0xFF, len: 1 },
];

/// Byte length of the sequence started by `lead` under charset `id`.
///
/// ASCII bytes are always single-byte. Non-ASCII bytes default to a
/// two-byte sequence unless an exception rule overrides the length.
pub fn sequence_len(id: u16, lead: u8) -> usize {
    if lead < 0x80 {
        return 1;
    }
    for rule in LEAD_RULES {
        if rule.ids.contains(&id) && rule.lo <= lead && lead <= rule.hi {
            return rule.len;
        }
    }
    2
}

/// Count the complete characters in `buf` under charset `id`.
///
/// Single-byte and unknown charsets count byte-per-byte. Multibyte
/// walks stop before a sequence the buffer cuts off, so the reported
/// byte total is always a safe truncation point.
pub fn count_chars(id: u16, buf: &[u8]) -> CharCount {
    match classify(id) {
        CharsetClass::SingleByte | CharsetClass::Unknown => CharCount {
            chars: buf.len(),
            bytes: buf.len(),
        },
        CharsetClass::Unicode => count_utf8(buf),
        CharsetClass::MultibyteCounted | CharsetClass::MultibyteHeuristic => {
            count_multibyte(id, buf)
        }
    }
}

fn count_utf8(buf: &[u8]) -> CharCount {
    let mut chars = 0;
    let mut idx = 0;
    while idx < buf.len() {
        // A malformed lead or a naked continuation byte degrades to a
        // one-byte character instead of failing the walk.
        let len = match utf8::continuation_count(buf[idx]) {
            Some(count) => count + 1,
            None => 1,
        };
        if len > buf.len() - idx {
            break;
        }
        chars += 1;
        idx += len;
    }
    CharCount { chars, bytes: idx }
}

fn count_multibyte(id: u16, buf: &[u8]) -> CharCount {
    let mut chars = 0;
    let mut idx = 0;
    while idx < buf.len() {
        let len = sequence_len(id, buf[idx]);
        if len > buf.len() - idx {
            break;
        }
        chars += 1;
        idx += len;
    }
    CharCount { chars, bytes: idx }
}
