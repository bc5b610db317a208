mod hex;

pub use hex::{parse_hex_payload, read_hex_file};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid hex digit '{digit}' at position {position}")]
    InvalidHexDigit { digit: char, position: usize },
    #[error("odd number of hex digits: {count}")]
    OddDigitCount { count: usize },
}
