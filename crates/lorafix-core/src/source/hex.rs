//! Hex text source implementation.
//!
//! Payloads arrive as hex text: CLI arguments, fixture files, copy-pasted
//! console dumps. This module turns such text into raw payload bytes,
//! tolerating ASCII whitespace and either letter case.

use std::fs;
use std::path::Path;

use crate::source::SourceError;

/// Parse a hex string into payload bytes.
///
/// ASCII whitespace may separate digits anywhere, even inside a byte;
/// digits pair up in reading order. Positions in errors count characters
/// of the original input, whitespace included.
pub fn parse_hex_payload(input: &str) -> Result<Vec<u8>, SourceError> {
    let mut bytes = Vec::with_capacity(input.len() / 2);
    let mut pending: Option<u8> = None;
    let mut digits = 0usize;

    for (position, ch) in input.chars().enumerate() {
        if ch.is_ascii_whitespace() {
            continue;
        }
        let nibble = ch
            .to_digit(16)
            .ok_or(SourceError::InvalidHexDigit {
                digit: ch,
                position,
            })? as u8;
        digits += 1;
        match pending.take() {
            Some(high) => bytes.push((high << 4) | nibble),
            None => pending = Some(nibble),
        }
    }

    if pending.is_some() {
        return Err(SourceError::OddDigitCount { count: digits });
    }
    Ok(bytes)
}

/// Read a file and parse its contents as hex text.
pub fn read_hex_file(path: &Path) -> Result<Vec<u8>, SourceError> {
    let text = fs::read_to_string(path)?;
    parse_hex_payload(&text)
}
