use super::error::TtnMapperError;
use super::layout;

pub struct TtnMapperReader<'a> {
    payload: &'a [u8],
}

impl<'a> TtnMapperReader<'a> {
    pub fn new(payload: &'a [u8]) -> Self {
        Self { payload }
    }

    /// The payload is fixed-size; anything shorter or longer is rejected.
    pub fn require_exact_len(&self, expected: usize) -> Result<(), TtnMapperError> {
        if self.payload.len() != expected {
            return Err(TtnMapperError::LengthMismatch {
                expected,
                actual: self.payload.len(),
            });
        }
        Ok(())
    }

    pub fn read_u24_be(&self, range: std::ops::Range<usize>) -> Result<u32, TtnMapperError> {
        let bytes = self.read_slice(range)?;
        if bytes.len() != 3 {
            return Err(self.length_mismatch());
        }
        Ok(((bytes[0] as u32) << 16) | ((bytes[1] as u32) << 8) | (bytes[2] as u32))
    }

    pub fn read_i16_be(&self, range: std::ops::Range<usize>) -> Result<i16, TtnMapperError> {
        let bytes = self.read_slice(range)?;
        if bytes.len() != 2 {
            return Err(self.length_mismatch());
        }
        Ok(i16::from_be_bytes([bytes[0], bytes[1]]))
    }

    pub fn read_u8(&self, offset: usize) -> Result<u8, TtnMapperError> {
        self.payload
            .get(offset)
            .copied()
            .ok_or_else(|| self.length_mismatch())
    }

    pub fn read_slice(&self, range: std::ops::Range<usize>) -> Result<&'a [u8], TtnMapperError> {
        self.payload
            .get(range)
            .ok_or_else(|| self.length_mismatch())
    }

    // Any failed read on a fixed-size payload means the payload is not the
    // contract length, so every error reports against PAYLOAD_LEN.
    fn length_mismatch(&self) -> TtnMapperError {
        TtnMapperError::LengthMismatch {
            expected: layout::PAYLOAD_LEN,
            actual: self.payload.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TtnMapperReader;
    use crate::protocols::ttnmapper::error::TtnMapperError;

    #[test]
    fn require_exact_len_accepts_matching_length() {
        let payload = [0u8; 9];
        let reader = TtnMapperReader::new(&payload);
        assert!(reader.require_exact_len(9).is_ok());
    }

    #[test]
    fn require_exact_len_rejects_short_payload() {
        let payload = [0u8; 5];
        let reader = TtnMapperReader::new(&payload);
        let err = reader.require_exact_len(9).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid payload length: expected 9 bytes, got 5"
        );
    }

    #[test]
    fn require_exact_len_rejects_long_payload() {
        let payload = [0u8; 12];
        let reader = TtnMapperReader::new(&payload);
        let err = reader.require_exact_len(9).unwrap_err();
        assert!(matches!(
            err,
            TtnMapperError::LengthMismatch {
                expected: 9,
                actual: 12
            }
        ));
    }

    #[test]
    fn read_u24_be_assembles_big_endian() {
        let payload = [0x12, 0x34, 0x56, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00];
        let reader = TtnMapperReader::new(&payload);
        assert_eq!(reader.read_u24_be(0..3).unwrap(), 0x0012_3456);
    }

    #[test]
    fn read_i16_be_recovers_negative_values() {
        let payload = [0xFF, 0xCE];
        let reader = TtnMapperReader::new(&payload);
        assert_eq!(reader.read_i16_be(0..2).unwrap(), -50);
    }

    #[test]
    fn read_u8_reads_single_offset() {
        let payload = [0x00, 0x0C];
        let reader = TtnMapperReader::new(&payload);
        assert_eq!(reader.read_u8(1).unwrap(), 0x0C);
    }

    #[test]
    fn out_of_bounds_read_reports_length_mismatch() {
        let payload = [0x01, 0x02];
        let reader = TtnMapperReader::new(&payload);
        let err = reader.read_u24_be(0..3).unwrap_err();
        assert!(err.to_string().contains("got 2"));
    }
}
