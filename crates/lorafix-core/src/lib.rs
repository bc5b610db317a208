//! LoRaFix core library for TTN Mapper uplink payloads.
//!
//! This crate implements the codec behind the `lorafix` CLI and behind
//! network-server payload formatter hooks: hex sources feed the formatter
//! entry points, which drive the protocol codec (layout/reader/parser plus
//! the device-side encoder) and assemble the structured result the mapping
//! pipeline consumes. Parsing is byte-oriented and side-effect free; all
//! I/O is isolated in `source` modules. Wire conventions are captured in
//! readers so parsers stay minimal.
//!
//! Invariants:
//! - A fix is only ever decoded from exactly 9 raw bytes; any other length
//!   becomes a warning in the result record, never a panic or hard error.
//! - Decoding is deterministic: the same bytes always produce bit-identical
//!   doubles.
//! - The legacy (v2) calling convention returns the bare data mapping and
//!   silently drops diagnostics, matching the deployed formatter.
//!
//! Version française (résumé):
//! Cette crate fournit le codec des trames TTN Mapper (9 octets) : sources
//! hex -> points d'entrée du formateur -> codec (layout/reader/parser et
//! encodeur côté traceur) -> enregistrement structuré `data`/`warnings`/
//! `errors`. Les E/S restent dans `source`, les conventions de trame dans le
//! `reader`. Garanties : longueur stricte de 9 octets signalée en warning,
//! décodage déterministe, convention v2 conservée à l'identique.
//!
//! # Examples
//! ```
//! use lorafix_core::{UplinkInput, decode_uplink};
//!
//! let input = UplinkInput {
//!     bytes: vec![0x75, 0x8E, 0xBB, 0x83, 0xD3, 0xD0, 0x00, 0x32, 0x0C],
//!     f_port: Some(1),
//! };
//! let decoded = decode_uplink(&input);
//! assert!(decoded.data.is_some());
//! assert!(decoded.warnings.is_empty());
//! assert!(decoded.errors.is_empty());
//! ```

use serde::de::Error as _;
use serde::ser::SerializeMap as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

mod formatter;
mod protocols;
mod source;

pub use formatter::{decode_uplink, decode_v2};
pub use protocols::ttnmapper::layout::PAYLOAD_LEN;
pub use protocols::ttnmapper::{
    GpsFix, GpsSample, TtnMapperError, encode_gps_sample, parse_gps_fix,
};
pub use source::{SourceError, parse_hex_payload, read_hex_file};

/// Raw uplink message as delivered by the network server hook.
///
/// # Examples
/// ```
/// use lorafix_core::UplinkInput;
///
/// let input = UplinkInput {
///     bytes: vec![0x00; 9],
///     f_port: None,
/// };
/// assert_eq!(input.bytes.len(), 9);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UplinkInput {
    /// Raw payload bytes, exactly as received over the air.
    pub bytes: Vec<u8>,
    /// LoRaWAN port; carried for hook parity, ignored by the decoder.
    #[serde(rename = "fPort", default, skip_serializing_if = "Option::is_none")]
    pub f_port: Option<u8>,
}

/// Structured result of the uplink payload formatter.
///
/// Serializes to the exact record the mapping pipeline consumes: `data` is
/// the fix mapping on success and an empty mapping `{}` on validation
/// failure, never `null`.
///
/// # Examples
/// ```
/// use lorafix_core::DecodedUplink;
///
/// let decoded = DecodedUplink {
///     data: None,
///     warnings: vec!["Invalid payload length: expected 9 bytes, got 5".to_string()],
///     errors: Vec::new(),
/// };
/// let json = serde_json::to_string(&decoded).unwrap();
/// assert!(json.starts_with("{\"data\":{}"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecodedUplink {
    /// Decoded fix, or `None` (serialized `{}`) when validation failed.
    #[serde(
        serialize_with = "gps_fix_or_empty",
        deserialize_with = "gps_fix_from_json"
    )]
    pub data: Option<GpsFix>,
    /// Human-readable diagnostics; one entry per length mismatch.
    pub warnings: Vec<String>,
    /// Hard errors; always empty for this format.
    pub errors: Vec<String>,
}

fn gps_fix_or_empty<S>(data: &Option<GpsFix>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match data {
        Some(fix) => fix.serialize(serializer),
        None => serializer.serialize_map(Some(0))?.end(),
    }
}

fn gps_fix_from_json<'de, D>(deserializer: D) -> Result<Option<GpsFix>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value.as_object() {
        Some(map) if map.is_empty() => Ok(None),
        _ => GpsFix::deserialize(value).map(Some).map_err(D::Error::custom),
    }
}
