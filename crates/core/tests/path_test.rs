//! Tests for delimiter location, safe-name truncation and bounded
//! length.

use sucre_core::text::path::{bounded_length, find_last_delimiter, sanitize_name};

// === find_last_delimiter, byte-unique charsets ===

#[test]
fn test_reverse_scan_forward_slash() {
    assert_eq!(find_last_delimiter(b"/a/b/c.txt", 31), 5);
    assert_eq!(find_last_delimiter(b"plain", 31), 0);
    assert_eq!(find_last_delimiter(b"", 31), 0);
}

#[test]
fn test_reverse_scan_backslash() {
    assert_eq!(find_last_delimiter(b"a\\b\\c", 31), 4);
    // whichever delimiter occurs last wins
    assert_eq!(find_last_delimiter(b"a\\b/c", 31), 4);
    assert_eq!(find_last_delimiter(b"a/b\\c", 31), 4);
}

#[test]
fn test_reverse_scan_trailing_delimiter() {
    assert_eq!(find_last_delimiter(b"dir/", 31), 4);
}

#[test]
fn test_utf8_reverse_scan() {
    // multibyte content before the delimiter is no obstacle
    let path = "héllo/wörld".as_bytes();
    let slash = path.iter().position(|&b| b == b'/').unwrap();
    assert_eq!(find_last_delimiter(path, 871), slash + 1);
}

// === find_last_delimiter, Shift-JIS style charsets ===

#[test]
fn test_sjis_trail_backslash_not_a_delimiter() {
    // 0x94 0x5C is one two-byte character whose trail byte is '\'
    let path = [b'd', b'i', b'r', b'/', 0x94, 0x5C, b'f'];
    assert_eq!(find_last_delimiter(&path, 832), 4);
    // a raw reverse scan (single-byte charset) would say 6
    assert_eq!(find_last_delimiter(&path, 31), 6);
}

#[test]
fn test_sjis_delimiter_after_multibyte() {
    let path = [0x94, 0x5C, b'/', b'x'];
    assert_eq!(find_last_delimiter(&path, 832), 3);
}

#[test]
fn test_sjis_demoted_lead_then_delimiter() {
    // 0xB1 is half-width katakana, single-byte; the '\' after it is real
    let path = [0xB1, b'\\', b'f'];
    assert_eq!(find_last_delimiter(&path, 832), 2);
}

#[test]
fn test_sjis_truncated_tail_stops_scan() {
    // lead byte with nothing after it; delimiters before it still count
    let path = [b'a', b'/', 0x94];
    assert_eq!(find_last_delimiter(&path, 832), 2);
}

#[test]
fn test_big5_trail_slash_not_a_delimiter() {
    // Big5 trail bytes span 0x40-0x7E; 0xA4 0x2F would embed '/'
    let path = [0xA4, 0x2F, b'x'];
    assert_eq!(find_last_delimiter(&path, 865), 0);
}

// === sanitize_name ===

#[test]
fn test_sanitize_passes_valid_names() {
    assert_eq!(sanitize_name(b"my_pkg.proc-2", 31), b"my_pkg.proc-2");
}

#[test]
fn test_sanitize_truncates_at_first_bad_byte() {
    assert_eq!(sanitize_name(b"proc!drop tables", 31), b"proc");
    assert_eq!(sanitize_name(b"a b", 31), b"a");
    assert_eq!(sanitize_name(b"\"x\"", 31), b"");
}

#[test]
fn test_sanitize_truncates_at_high_byte() {
    assert_eq!(sanitize_name(&[b'p', 0xE9, b'q'], 31), b"p");
}

#[test]
fn test_sanitize_masks_us7ascii() {
    // 0xC1 masks to 0x41 'A' under US7ASCII, stays invalid elsewhere
    assert_eq!(sanitize_name(&[0xC1, b'b'], 1), b"Ab");
    assert_eq!(sanitize_name(&[0xC1, b'b'], 31), b"");
}

// === bounded_length ===

#[test]
fn test_bounded_length_under_cap() {
    assert_eq!(bounded_length(871, b"abc", 10), 3);
    assert_eq!(bounded_length(31, b"", 4), 0);
}

#[test]
fn test_bounded_length_single_byte_cap() {
    assert_eq!(bounded_length(31, b"abcdef", 4), 4);
}

#[test]
fn test_bounded_length_never_splits_utf8() {
    let text = "aé€".as_bytes(); // 1 + 2 + 3 bytes
    assert_eq!(bounded_length(871, text, 6), 6);
    assert_eq!(bounded_length(871, text, 5), 3); // mid-euro, back to 3
    assert_eq!(bounded_length(871, text, 4), 3);
    assert_eq!(bounded_length(871, text, 3), 3);
    assert_eq!(bounded_length(871, text, 2), 1); // mid-é, back to 1
}

#[test]
fn test_bounded_length_prefix_is_whole_characters() {
    let text = "日本語テスト".as_bytes();
    for cap in 0..text.len() + 2 {
        let len = bounded_length(871, text, cap);
        assert!(std::str::from_utf8(&text[..len]).is_ok(), "cap {cap}");
    }
}

#[test]
fn test_bounded_length_sjis() {
    let text = [0x94, 0x5C, 0x94, 0x5C, b'a'];
    assert_eq!(bounded_length(832, &text, 3), 2);
    assert_eq!(bounded_length(832, &text, 4), 4);
}

#[test]
fn test_bounded_length_zero_chars_falls_back_to_cap() {
    // one lead byte alone counts zero characters; the raw cap wins
    let text = [0x94, 0x5C, 0x94, 0x5C];
    assert_eq!(bounded_length(832, &text, 1), 1);
}

#[test]
fn test_bounded_length_idempotent() {
    let cases: [(u16, &[u8], usize); 4] = [
        (871, "aé€日本".as_bytes(), 7),
        (832, &[0x94, 0x5C, 0xB1, 0x41], 3),
        (830, &[0x8F, 0xA1, 0xA2, 0xA4, 0xA2], 4),
        (31, b"plain bytes", 5),
    ];
    for (id, text, cap) in cases {
        let once = bounded_length(id, text, cap);
        let twice = bounded_length(id, &text[..once], cap);
        assert_eq!(once, twice, "id {id} cap {cap}");
    }
}
