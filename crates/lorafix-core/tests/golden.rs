use std::fs;
use std::path::Path;

use lorafix_core::{DecodedUplink, UplinkInput, decode_uplink, read_hex_file};

fn load_expected_uplink(dir: &str) -> DecodedUplink {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..");
    let expected_path = root.join(dir).join("expected_uplink.json");

    let expected_json = fs::read_to_string(&expected_path).expect("read expected_uplink.json");
    serde_json::from_str(&expected_json).expect("parse expected uplink")
}

fn run_golden(dir: &str) {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..");
    let input = root.join(dir).join("input.hex");
    let expected = load_expected_uplink(dir);

    let bytes = read_hex_file(&input).expect("read input.hex");
    let actual = decode_uplink(&UplinkInput {
        bytes,
        f_port: None,
    });

    let actual_value = serde_json::to_value(actual).expect("serialize actual");
    let expected_value = serde_json::to_value(expected).expect("serialize expected");

    assert_eq!(actual_value, expected_value, "golden mismatch in {dir}");
}

#[test]
fn golden_sample_payload() {
    run_golden("tests/golden/sample_payload");
}

#[test]
fn golden_berlin() {
    run_golden("tests/golden/berlin");
}

#[test]
fn golden_short_payload() {
    run_golden("tests/golden/short_payload");
}

#[test]
fn golden_long_payload() {
    run_golden("tests/golden/long_payload");
}

#[test]
fn golden_fixture_floats_parse_bit_exact() {
    // The shortest reprs pinned in the fixtures must parse back to the
    // exact doubles the decoder produced, not a neighboring value.
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..");
    let input = root.join("tests/golden/berlin/input.hex");

    let bytes = read_hex_file(&input).expect("read input.hex");
    let actual = decode_uplink(&UplinkInput {
        bytes,
        f_port: None,
    });
    let expected = load_expected_uplink("tests/golden/berlin");

    let actual = actual.data.expect("actual fix");
    let expected = expected.data.expect("expected fix");
    assert_eq!(actual.latitude.to_bits(), expected.latitude.to_bits());
    assert_eq!(actual.longitude.to_bits(), expected.longitude.to_bits());
    assert_eq!(actual.hdop.to_bits(), expected.hdop.to_bits());
}

#[test]
fn golden_berlin_lands_near_alexanderplatz() {
    let decoded = load_expected_uplink("tests/golden/berlin");
    let fix = decoded.data.expect("fix");
    assert!((fix.latitude - 52.520008).abs() < 1e-4);
    assert!((fix.longitude - 13.404954).abs() < 1e-4);
    assert_eq!(fix.altitude, 50);
    assert_eq!(fix.hdop, 1.2);
}

#[test]
fn golden_short_payload_names_actual_length() {
    let decoded = load_expected_uplink("tests/golden/short_payload");
    assert!(decoded.data.is_none());
    assert_eq!(
        decoded.warnings,
        vec!["Invalid payload length: expected 9 bytes, got 5".to_string()]
    );
    assert!(decoded.errors.is_empty());
}

#[test]
fn golden_long_payload_names_actual_length() {
    let decoded = load_expected_uplink("tests/golden/long_payload");
    assert!(decoded.data.is_none());
    assert_eq!(
        decoded.warnings,
        vec!["Invalid payload length: expected 9 bytes, got 12".to_string()]
    );
}
