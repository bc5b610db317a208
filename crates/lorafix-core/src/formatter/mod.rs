//! Uplink formatter entry points.
//!
//! One internal decode routine, two host calling conventions: the primary
//! convention returns the full `data`/`warnings`/`errors` record, the
//! legacy (v2) convention returns the bare data mapping. Neither ever
//! raises; malformed input degrades to a warning (primary) or an empty
//! mapping (legacy).

use crate::protocols::ttnmapper::{GpsFix, parse_gps_fix};
use crate::{DecodedUplink, UplinkInput};

/// Decode an uplink with the primary calling convention.
///
/// A payload of the wrong length produces an empty `data` mapping and one
/// warning naming the actual length; `errors` stays empty in every case.
///
/// # Examples
/// ```
/// use lorafix_core::{UplinkInput, decode_uplink};
///
/// let input = UplinkInput { bytes: vec![0x00; 5], f_port: None };
/// let decoded = decode_uplink(&input);
/// assert!(decoded.data.is_none());
/// assert_eq!(
///     decoded.warnings,
///     vec!["Invalid payload length: expected 9 bytes, got 5".to_string()]
/// );
/// assert!(decoded.errors.is_empty());
/// ```
pub fn decode_uplink(input: &UplinkInput) -> DecodedUplink {
    match parse_gps_fix(&input.bytes) {
        Ok(fix) => DecodedUplink {
            data: Some(fix),
            warnings: Vec::new(),
            errors: Vec::new(),
        },
        Err(err) => DecodedUplink {
            data: None,
            warnings: vec![err.to_string()],
            errors: Vec::new(),
        },
    }
}

/// Decode an uplink with the legacy (v2) calling convention.
///
/// Returns the data mapping directly; on a length mismatch the diagnostic
/// is dropped and `None` (an empty mapping) is returned, exactly like the
/// deployed v2 formatter. The port is accepted for signature compatibility
/// and ignored.
pub fn decode_v2(bytes: &[u8], _port: u8) -> Option<GpsFix> {
    parse_gps_fix(bytes).ok()
}
