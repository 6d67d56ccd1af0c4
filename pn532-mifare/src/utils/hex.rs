//! Hexadecimal helpers used for logging and operator key entry.
//!
//! Support both compact (no-separator) and spaced output; the parser accepts
//! optional whitespace so "11 22 33 44 66 55" and "112233446655" both work.

use crate::{Error, Result};

/// Convert a byte slice to a lowercase hex string without separators.
///
/// Example: `&[0xde, 0xad]` -> `"dead"`
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        use std::fmt::Write;
        // write! never fails writing to a String
        let _ = write!(&mut s, "{:02x}", b);
    }
    s
}

/// Convert a byte slice to a lowercase hex string with a single space between
/// each byte.
///
/// Example: `&[0xde, 0xad]` -> `"de ad"`
pub fn bytes_to_hex_spaced(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 3);
    for (i, b) in bytes.iter().enumerate() {
        if i != 0 {
            s.push(' ');
        }
        use std::fmt::Write;
        let _ = write!(&mut s, "{:02x}", b);
    }
    s
}

/// Parse a hex string into bytes.
///
/// Accepts strings with or without ASCII whitespace.
pub fn parse_hex(s: &str) -> Result<Vec<u8>> {
    let cleaned: String = s.chars().filter(|c| !c.is_whitespace()).collect();

    if !cleaned.is_ascii() {
        return Err(Error::InvalidHex("non-ascii characters".to_string()));
    }
    if cleaned.len() % 2 != 0 {
        return Err(Error::InvalidHex("odd number of digits".to_string()));
    }

    let mut out = Vec::with_capacity(cleaned.len() / 2);
    let mut i = 0usize;
    while i < cleaned.len() {
        let pair = &cleaned[i..i + 2];
        let byte = u8::from_str_radix(pair, 16)
            .map_err(|_| Error::InvalidHex(format!("invalid pair '{}'", pair)))?;
        out.push(byte);
        i += 2;
    }

    Ok(out)
}
