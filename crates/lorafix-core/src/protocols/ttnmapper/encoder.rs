use super::layout;

/// GPS measurement prior to quantization to the wire format.
///
/// # Examples
/// ```
/// use lorafix_core::{GpsSample, encode_gps_sample};
///
/// let sample = GpsSample {
///     latitude: 52.520008,
///     longitude: 13.404954,
///     altitude: 50.0,
///     hdop: 1.2,
/// };
/// let payload = encode_gps_sample(&sample);
/// assert_eq!(payload.len(), 9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GpsSample {
    /// Degrees, clamped on encode to [-90, 90].
    pub latitude: f64,
    /// Degrees, clamped on encode to [-180, 180].
    pub longitude: f64,
    /// Meters, clamped on encode to the i16 range.
    pub altitude: f64,
    /// Horizontal dilution of precision, clamped on encode to [0, 25.5].
    pub hdop: f64,
}

/// Quantize a measurement into the 9-byte uplink payload.
///
/// Encoding is total: out-of-range and non-finite measurements clamp to the
/// representable range rather than failing.
pub fn encode_gps_sample(sample: &GpsSample) -> [u8; layout::PAYLOAD_LEN] {
    let mut payload = [0u8; layout::PAYLOAD_LEN];

    // 24-bit values occupy the low three bytes of the u32.
    let lat = encode_latitude(sample.latitude).to_be_bytes();
    payload[layout::LATITUDE_RANGE.clone()].copy_from_slice(&lat[1..]);
    let lon = encode_longitude(sample.longitude).to_be_bytes();
    payload[layout::LONGITUDE_RANGE.clone()].copy_from_slice(&lon[1..]);

    payload[layout::ALTITUDE_RANGE.clone()]
        .copy_from_slice(&encode_altitude(sample.altitude).to_be_bytes());
    payload[layout::HDOP_OFFSET] = encode_hdop(sample.hdop);

    payload
}

/// Map [-90, 90] degrees onto the full unsigned 24-bit range.
pub fn encode_latitude(degrees: f64) -> u32 {
    let normalized = ((degrees + 90.0) / 180.0).clamp(0.0, 1.0);
    (normalized * layout::U24_MAX) as u32
}

/// Map [-180, 180] degrees onto the full unsigned 24-bit range.
pub fn encode_longitude(degrees: f64) -> u32 {
    let normalized = ((degrees + 180.0) / 360.0).clamp(0.0, 1.0);
    (normalized * layout::U24_MAX) as u32
}

/// Carry altitude as signed meters, truncated toward zero.
pub fn encode_altitude(meters: f64) -> i16 {
    meters.clamp(-32768.0, 32767.0) as i16
}

/// Carry HDOP in tenths, saturating at 25.5.
pub fn encode_hdop(hdop: f64) -> u8 {
    (hdop * layout::HDOP_SCALE).clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::{
        GpsSample, encode_altitude, encode_gps_sample, encode_hdop, encode_latitude,
        encode_longitude,
    };
    use crate::protocols::ttnmapper::layout;
    use crate::protocols::ttnmapper::parser::parse_gps_fix;

    fn berlin() -> GpsSample {
        GpsSample {
            latitude: 52.520008,
            longitude: 13.404954,
            altitude: 50.0,
            hdop: 1.2,
        }
    }

    #[test]
    fn encode_berlin_sample_bytes() {
        let payload = encode_gps_sample(&berlin());
        assert_eq!(
            payload,
            [0xCA, 0xB1, 0xF2, 0x89, 0x88, 0x4B, 0x00, 0x32, 0x0C]
        );
    }

    #[test]
    fn encode_then_decode_stays_within_one_step() {
        let sample = berlin();
        let fix = parse_gps_fix(&encode_gps_sample(&sample)).unwrap();

        let lat_step = 180.0 / layout::U24_MAX;
        let lon_step = 360.0 / layout::U24_MAX;
        assert!((fix.latitude - sample.latitude).abs() <= lat_step);
        assert!((fix.longitude - sample.longitude).abs() <= lon_step);
        assert_eq!(fix.altitude, 50);
        assert_eq!(fix.hdop, 1.2);
    }

    #[test]
    fn latitude_clamps_to_representable_range() {
        assert_eq!(encode_latitude(-90.0), 0);
        assert_eq!(encode_latitude(-91.0), 0);
        assert_eq!(encode_latitude(90.0), 16_777_215);
        assert_eq!(encode_latitude(91.0), 16_777_215);
    }

    #[test]
    fn longitude_clamps_to_representable_range() {
        assert_eq!(encode_longitude(-180.0), 0);
        assert_eq!(encode_longitude(-200.0), 0);
        assert_eq!(encode_longitude(180.0), 16_777_215);
        assert_eq!(encode_longitude(200.0), 16_777_215);
    }

    #[test]
    fn altitude_clamps_and_truncates_toward_zero() {
        assert_eq!(encode_altitude(40_000.0), 32_767);
        assert_eq!(encode_altitude(-40_000.0), -32_768);
        assert_eq!(encode_altitude(50.7), 50);
        assert_eq!(encode_altitude(-50.7), -50);
    }

    #[test]
    fn hdop_saturates_at_byte_range() {
        assert_eq!(encode_hdop(0.0), 0);
        assert_eq!(encode_hdop(1.2), 12);
        assert_eq!(encode_hdop(25.5), 255);
        assert_eq!(encode_hdop(30.0), 255);
    }

    #[test]
    fn non_finite_measurements_clamp_instead_of_panicking() {
        let payload = encode_gps_sample(&GpsSample {
            latitude: f64::NAN,
            longitude: f64::INFINITY,
            altitude: f64::NEG_INFINITY,
            hdop: f64::NAN,
        });
        let fix = parse_gps_fix(&payload).unwrap();
        assert!((-90.0..=90.0).contains(&fix.latitude));
        assert_eq!(fix.longitude, 180.0);
        assert_eq!(fix.altitude, -32_768);
        assert_eq!(fix.hdop, 0.0);
    }
}
