use thiserror::Error;

/// Errors returned by TTN Mapper payload decoding.
///
/// The display form of `LengthMismatch` is surfaced verbatim as a warning
/// string by the uplink formatter, so its wording is part of the host
/// contract.
#[derive(Debug, Error)]
pub enum TtnMapperError {
    #[error("Invalid payload length: expected {expected} bytes, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}
