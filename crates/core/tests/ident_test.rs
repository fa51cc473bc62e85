//! Tests for SQL identifier quoting and the unquoted byte table.

use sucre_core::text::ident::quote_identifier;
use sucre_core::text::tables::IDENT_BYTES;

// === Unquoted pass-through ===

#[test]
fn test_plain_identifier_unchanged() {
    assert_eq!(quote_identifier(b"abc", 31), b"abc");
    assert_eq!(quote_identifier(b"my_pkg.proc-2", 31), b"my_pkg.proc-2");
    // case is preserved when no quoting happens
    assert_eq!(quote_identifier(b"MixedCase", 31), b"MixedCase");
}

// === Quoted forms ===

#[test]
fn test_embedded_quote_replaced_and_uppercased() {
    assert_eq!(quote_identifier(b"a\"b", 31), b"\"A B\"");
}

#[test]
fn test_space_triggers_quoting() {
    assert_eq!(quote_identifier(b"two words", 31), b"\"TWO WORDS\"");
}

#[test]
fn test_control_bytes_become_spaces() {
    assert_eq!(quote_identifier(b"a\x01b\nc", 31), b"\"A B C\"");
}

#[test]
fn test_punctuation_kept_inside_quotes() {
    assert_eq!(quote_identifier(b"p$q#r", 31), b"\"P$Q#R\"");
}

// === High bytes per charset class ===

#[test]
fn test_high_bytes_kept_for_byte_unique_charsets() {
    // single-byte charset: the 0xE9 byte passes through untouched
    assert_eq!(quote_identifier(&[b'a', 0xE9], 31), vec![b'"', b'A', 0xE9, b'"']);
    // UTF-8 and EUC-style charsets are byte-unique too
    assert_eq!(quote_identifier(&[b'a', 0xE9], 871), vec![b'"', b'A', 0xE9, b'"']);
    assert_eq!(quote_identifier(&[b'a', 0xE9], 830), vec![b'"', b'A', 0xE9, b'"']);
}

#[test]
fn test_high_bytes_stripped_for_heuristic_charsets() {
    for id in [832, 852, 865] {
        assert_eq!(
            quote_identifier(&[b'a', 0xE9, b'b'], id),
            b"\"A B\"",
            "id {id}"
        );
    }
}

#[test]
fn test_high_bytes_stripped_for_unknown_charsets() {
    assert_eq!(quote_identifier(&[b'a', 0x80], 845), b"\"A \"");
}

#[test]
fn test_del_byte_counts_as_high() {
    assert_eq!(quote_identifier(&[b'a', 0x7F], 832), b"\"A \"");
    assert_eq!(quote_identifier(&[b'a', 0x7F], 31), vec![b'"', b'A', 0x7F, b'"']);
}

// === IDENT_BYTES table ===

#[test]
fn test_ident_bytes_accepts() {
    for byte in [b'A', b'Z', b'a', b'z', b'0', b'9', b'_', b'.', b'-'] {
        assert!(IDENT_BYTES[byte as usize], "byte {byte:#x}");
    }
}

#[test]
fn test_ident_bytes_rejects() {
    for byte in [b' ', b'/', b'\\', b'"', b'\'', b';', 0x00u8, 0x1F, 0x7F, 0x80, 0xFF] {
        assert!(!IDENT_BYTES[byte as usize], "byte {byte:#x}");
    }
}

#[test]
fn test_ident_bytes_rejects_entire_high_half() {
    for value in 0x7F..=0xFFusize {
        assert!(!IDENT_BYTES[value]);
    }
}
