//! Charset catalog and classification.
//!
//! This module contains:
//! - `catalog`: the ordered charset name table and id lookups

pub mod catalog;

pub use catalog::{
    CHARSET_TABLE, CharsetClass, CharsetEntry, MULTIBYTE_THRESHOLD, US7ASCII, classify,
    find_by_iana_name, find_by_oracle_name, iana_name, iana_of, id_by_iana_name,
    id_by_oracle_name, id_of, oracle_name, resolve,
};
