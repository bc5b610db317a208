//! Protocol codec modules.
//!
//! Each protocol follows a layered structure:
//! - `layout`: byte offsets and ranges (source of truth)
//! - `reader`: safe byte access and wire conventions
//! - `parser`: domain-level decoding (no direct byte indexing)
//! - `encoder`: device-side production of the same wire format
//! - `error`: explicit, actionable errors
//!
//! Parsers and encoders are pure and contain no I/O; sources and the
//! formatter layer handle file access and result assembly.

pub mod ttnmapper;
