// TTN Mapper uplink payload: 9 bytes, big-endian.
//
// | offset | field     | encoding                                   |
// |--------|-----------|--------------------------------------------|
// | 0..3   | latitude  | unsigned 24-bit, scaled to [-90, 90]       |
// | 3..6   | longitude | unsigned 24-bit, scaled to [-180, 180]     |
// | 6..8   | altitude  | signed 16-bit (two's complement), meters   |
// | 8      | HDOP      | unsigned 8-bit, one implied decimal digit  |
//
// No version field, no CRC.

pub const PAYLOAD_LEN: usize = 9;

pub const LATITUDE_RANGE: std::ops::Range<usize> = 0..3;
pub const LONGITUDE_RANGE: std::ops::Range<usize> = 3..6;
pub const ALTITUDE_RANGE: std::ops::Range<usize> = 6..8;
pub const HDOP_OFFSET: usize = 8;

/// Largest value of an unsigned 24-bit field (2^24 - 1).
pub const U24_MAX: f64 = 16_777_215.0;

/// HDOP is carried as tenths.
pub const HDOP_SCALE: f64 = 10.0;
