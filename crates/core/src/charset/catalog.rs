//! Charset catalog mapping legacy numeric ids, Oracle-style names and
//! IANA names.
//!
//! The table is ordered and order is load-bearing: IANA lookups return the
//! first matching row, which decides which id wins when several rows share
//! an IANA name. Rows after the canonical row for an id carry no Oracle
//! name; they only register additional IANA aliases.

use crate::error::{CharsetError, Result};

/// One catalog row: canonical rows carry the Oracle name, alias rows
/// carry only an extra IANA name for the same id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharsetEntry {
    pub oracle_name: Option<&'static str>,
    pub iana_name: &'static str,
    pub id: u16,
}

const fn entry(oracle_name: Option<&'static str>, iana_name: &'static str, id: u16) -> CharsetEntry {
    CharsetEntry {
        oracle_name,
        iana_name,
        id,
    }
}

/// Charset ids below this value are always single-byte.
pub const MULTIBYTE_THRESHOLD: u16 = 800;

/// 7-bit ASCII charset id; bytes get masked to 7 bits during path
/// sanitization under this id.
pub const US7ASCII: u16 = 1;

/// The charset name table, ordered.
///
/// UTF8 (871) is listed before AL32UTF8 (873) so that IANA lookups of
/// "utf-8" resolve to 871. The 8.x client side expects that id; keep the
/// ordering even though 873 is the more complete encoding.
pub const CHARSET_TABLE: &[CharsetEntry] = &[
    entry(Some("US7ASCII"), "us-ascii", 1),
    entry(None, "iso-ir-6", 1),
    entry(None, "ansi_x3.4-1968", 1),
    entry(None, "ansi_x3.4-1986", 1),
    entry(None, "iso_646.irv:1991", 1),
    entry(None, "ascii", 1),
    entry(None, "iso646-us", 1),
    entry(None, "us", 1),
    entry(None, "ibm367", 1),
    entry(None, "cp367", 1),
    entry(Some("WE8ISO8859P1"), "iso-8859-1", 31),
    entry(None, "iso_8859-1:1987", 31),
    entry(None, "iso-ir-100", 31),
    entry(None, "iso_8859-1", 31),
    entry(None, "latin1", 31),
    entry(None, "l1", 31),
    entry(None, "ibm819", 31),
    entry(None, "cp819", 31),
    entry(Some("EE8ISO8859P2"), "iso-8859-2", 32),
    entry(None, "latin2", 32),
    entry(None, "l2", 32),
    entry(Some("SE8ISO8859P3"), "iso-8859-3", 33),
    entry(None, "latin3", 33),
    entry(Some("NEE8ISO8859P4"), "iso-8859-4", 34),
    entry(None, "latin4", 34),
    entry(Some("CL8ISO8859P5"), "iso-8859-5", 35),
    entry(None, "cyrillic", 35),
    entry(Some("AR8ISO8859P6"), "iso-8859-6", 36),
    entry(None, "arabic", 36),
    entry(Some("EL8ISO8859P7"), "iso-8859-7", 37),
    entry(None, "greek", 37),
    entry(Some("IW8ISO8859P8"), "iso-8859-8", 38),
    entry(None, "hebrew", 38),
    entry(Some("WE8ISO8859P9"), "iso-8859-9", 39),
    entry(None, "latin5", 39),
    entry(Some("NE8ISO8859P10"), "iso-8859-10", 40),
    entry(None, "latin6", 40),
    entry(Some("WE8ISO8859P15"), "iso-8859-15", 46),
    entry(None, "latin-9", 46),
    entry(Some("WE8PC850"), "ibm850", 160),
    entry(None, "cp850", 160),
    entry(Some("EE8MSWIN1250"), "windows-1250", 170),
    entry(Some("CL8MSWIN1251"), "windows-1251", 171),
    entry(Some("EL8MSWIN1253"), "windows-1253", 174),
    entry(Some("IW8MSWIN1255"), "windows-1255", 175),
    entry(Some("TR8MSWIN1254"), "windows-1254", 177),
    entry(Some("WE8MSWIN1252"), "windows-1252", 178),
    entry(None, "cp1252", 178),
    entry(Some("JA16EUC"), "euc-jp", 830),
    entry(None, "eucjp", 830),
    entry(None, "x-euc-jp", 830),
    entry(Some("JA16EUCYEN"), "EUCJIS", 831),
    entry(Some("JA16SJIS"), "shift-jis", 832),
    entry(None, "shift_jis", 832),
    entry(None, "ms_kanji", 832),
    entry(None, "csshiftjis", 832),
    entry(None, "x-sjis", 832),
    entry(Some("JA16SJISYEN"), "shift_jis", 834),
    entry(Some("JA16EUCTILDE"), "EUCJIS", 837),
    entry(Some("JA16SJISTILDE"), "shift_jis", 838),
    entry(Some("KO16KSC5601"), "euc-kr", 846),
    entry(None, "ksc_5601", 846),
    entry(None, "ks_c_5601-1987", 846),
    entry(None, "korean", 846),
    entry(None, "csksc56011987", 846),
    entry(Some("KO16MSWIN949"), "windows-949", 845),
    entry(Some("ZHS16CGB231280"), "gb2312", 850),
    entry(None, "csgb2312", 850),
    entry(None, "chinese", 850),
    entry(None, "gb_2312-80", 850),
    entry(Some("ZHS16GBK"), "gbk", 852),
    entry(None, "cp936", 852),
    entry(Some("ZHT32EUC"), "euc-tw", 860),
    entry(None, "cns11643", 860),
    entry(Some("ZHT16BIG5"), "big5", 865),
    entry(None, "csbig5", 865),
    entry(None, "x-x-big5", 865),
    entry(Some("AL24UTFFSS"), "unicode-1-1-utf-8", 870),
    entry(Some("UTF8"), "utf-8", 871),
    entry(None, "utf8", 871),
    entry(None, "unicode-2-0-utf-8", 871),
    entry(Some("AL32UTF8"), "utf-8", 873),
];

/// How the byte structure of a charset is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharsetClass {
    /// One byte per character, always.
    SingleByte,
    /// UTF-8 family; lead byte encodes the sequence length.
    Unicode,
    /// EUC-style multibyte; trailing bytes never collide with ASCII.
    MultibyteCounted,
    /// Multibyte where a trailing byte may equal an ASCII delimiter
    /// (Shift-JIS, Big5, GBK), so raw byte scans are unsafe.
    MultibyteHeuristic,
    /// Multibyte id with no counting rules; treated byte-per-byte.
    Unknown,
}

impl CharsetClass {
    /// True when no trailing byte of a multibyte character can be
    /// confused with a single-byte delimiter.
    pub fn is_byte_unique(self) -> bool {
        !matches!(self, CharsetClass::MultibyteHeuristic)
    }
}

/// Classify a charset id by its byte structure.
pub fn classify(id: u16) -> CharsetClass {
    if id < MULTIBYTE_THRESHOLD {
        return CharsetClass::SingleByte;
    }
    match id {
        870 | 871 | 873 => CharsetClass::Unicode,
        830 | 831 | 837 | 860 => CharsetClass::MultibyteCounted,
        832 | 834 | 836 | 838 | 850 | 852 | 865 => CharsetClass::MultibyteHeuristic,
        _ => CharsetClass::Unknown,
    }
}

/// Find the table index for an Oracle charset name, case-insensitively.
/// Alias rows are skipped; only canonical rows match.
pub fn find_by_oracle_name(name: &str) -> Option<usize> {
    CHARSET_TABLE
        .iter()
        .position(|e| e.oracle_name.is_some_and(|o| o.eq_ignore_ascii_case(name)))
}

/// Find the table index for an IANA charset name, case-insensitively.
/// All rows participate, aliases included; the first match wins.
pub fn find_by_iana_name(name: &str) -> Option<usize> {
    CHARSET_TABLE
        .iter()
        .position(|e| e.iana_name.eq_ignore_ascii_case(name))
}

/// Charset id at a table index.
pub fn id_of(index: usize) -> u16 {
    CHARSET_TABLE[index].id
}

/// IANA name at a table index.
pub fn iana_of(index: usize) -> &'static str {
    CHARSET_TABLE[index].iana_name
}

/// Charset id for an Oracle name.
pub fn id_by_oracle_name(name: &str) -> Option<u16> {
    find_by_oracle_name(name).map(id_of)
}

/// Charset id for an IANA name.
pub fn id_by_iana_name(name: &str) -> Option<u16> {
    find_by_iana_name(name).map(id_of)
}

/// IANA name registered for a charset id, from its first table row.
pub fn iana_name(id: u16) -> Option<&'static str> {
    CHARSET_TABLE.iter().find(|e| e.id == id).map(|e| e.iana_name)
}

/// Oracle name for a charset id, from its canonical table row.
pub fn oracle_name(id: u16) -> Option<&'static str> {
    CHARSET_TABLE
        .iter()
        .find(|e| e.id == id)
        .and_then(|e| e.oracle_name)
}

/// Resolve a charset name to an id, trying the Oracle name first and
/// falling back to IANA names.
///
/// # Errors
///
/// Returns `CharsetError::NotFound` when the name matches no row.
pub fn resolve(name: &str) -> Result<u16> {
    id_by_oracle_name(name)
        .or_else(|| id_by_iana_name(name))
        .ok_or_else(|| CharsetError::NotFound(name.to_string()))
}
