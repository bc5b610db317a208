use serde::{Deserialize, Serialize};

use super::error::TtnMapperError;
use super::layout;
use super::reader::TtnMapperReader;

/// One decoded GPS fix.
///
/// Only ever produced from exactly 9 raw bytes; immutable once returned.
///
/// # Examples
/// ```
/// use lorafix_core::parse_gps_fix;
///
/// let fix = parse_gps_fix(&[0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x32, 0x0C]).unwrap();
/// assert_eq!(fix.latitude, -90.0);
/// assert_eq!(fix.altitude, 50);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GpsFix {
    /// Degrees, [-90, 90].
    pub latitude: f64,
    /// Degrees, [-180, 180].
    pub longitude: f64,
    /// Meters above sea level.
    pub altitude: i16,
    /// Horizontal dilution of precision; lower is better.
    pub hdop: f64,
}

/// Decode a 9-byte TTN Mapper payload into a [`GpsFix`].
///
/// Any other payload length yields [`TtnMapperError::LengthMismatch`]; raw
/// byte values themselves are never rejected because the fixed-point widths
/// bound every decoded field.
///
/// # Examples
/// ```
/// use lorafix_core::parse_gps_fix;
///
/// let err = parse_gps_fix(&[0x75, 0x8E, 0xBB, 0x83, 0xD3]).unwrap_err();
/// assert_eq!(
///     err.to_string(),
///     "Invalid payload length: expected 9 bytes, got 5"
/// );
/// ```
pub fn parse_gps_fix(payload: &[u8]) -> Result<GpsFix, TtnMapperError> {
    let reader = TtnMapperReader::new(payload);
    reader.require_exact_len(layout::PAYLOAD_LEN)?;

    let lat_raw = reader.read_u24_be(layout::LATITUDE_RANGE.clone())?;
    let lon_raw = reader.read_u24_be(layout::LONGITUDE_RANGE.clone())?;
    let altitude = reader.read_i16_be(layout::ALTITUDE_RANGE.clone())?;
    let hdop_raw = reader.read_u8(layout::HDOP_OFFSET)?;

    Ok(GpsFix {
        latitude: (lat_raw as f64 / layout::U24_MAX) * 180.0 - 90.0,
        longitude: (lon_raw as f64 / layout::U24_MAX) * 360.0 - 180.0,
        altitude,
        hdop: hdop_raw as f64 / layout::HDOP_SCALE,
    })
}
