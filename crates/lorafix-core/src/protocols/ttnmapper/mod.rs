//! TTN Mapper payload codec.
//!
//! The tracker packs one GPS fix into 9 big-endian bytes: latitude and
//! longitude as unsigned 24-bit fixed-point values spanning their full
//! degree ranges, altitude as a signed 16-bit meter count, and HDOP with
//! one implied decimal digit. The parser enforces the exact payload length
//! and maps the fixed-point fields back to degrees and meters; the encoder
//! performs the inverse quantization, clamping out-of-range measurements
//! instead of failing.
//!
//! The length error's display form is the warning text the network server
//! surfaces verbatim. Byte offsets live in `layout`, wire conventions in
//! `reader`.
//!
//! Version française (résumé):
//! Codec des trames TTN Mapper : 9 octets grand-boutistes portant latitude
//! et longitude en virgule fixe 24 bits, altitude signée 16 bits et HDOP au
//! dixième. Le parseur exige la longueur exacte; l'encodeur borne les
//! mesures hors plage. Les positions sont dans `layout`, les conventions
//! dans `reader`.

pub mod encoder;
pub mod error;
pub mod layout;
pub mod parser;
pub mod reader;

pub use encoder::{GpsSample, encode_gps_sample};
pub use error::TtnMapperError;
pub use parser::{GpsFix, parse_gps_fix};
