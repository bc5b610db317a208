use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use lorafix_core::{
    GpsSample, SourceError, UplinkInput, decode_uplink, decode_v2, encode_gps_sample,
    parse_hex_payload, read_hex_file,
};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("LORAFIX_BUILD_COMMIT"),
    ", ",
    env!("LORAFIX_BUILD_DATE"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "lorafix")]
#[command(version, long_version = LONG_VERSION)]
#[command(
    about = "Payload formatter for TTN Mapper GPS uplinks (decode / encode).",
    long_about = None,
    after_help = "Examples:\n  lorafix payload decode 758EBB83D3D000320C --stdout\n  lorafix payload decode --hex-file uplink.hex -o uplink.json\n  lorafix payload encode --latitude 52.520008 --longitude 13.404954 --altitude 50 --hdop 1.2"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Operations on TTN Mapper uplink payloads.
    Payload {
        #[command(subcommand)]
        command: PayloadCommands,
    },
}

#[derive(Subcommand, Debug)]
enum PayloadCommands {
    /// Decode a 9-byte uplink payload into a JSON uplink record.
    #[command(
        after_help = "Examples:\n  lorafix payload decode 758EBB83D3D000320C --stdout\n  lorafix payload decode --hex-file uplink.hex -o uplink.json\n  lorafix payload decode 758EBB83D3D000320C --stdout --legacy"
    )]
    Decode {
        /// Payload as hex text (whitespace tolerated)
        #[arg(required_unless_present = "hex_file")]
        payload: Option<String>,

        /// Read the payload hex from a file instead
        #[arg(long, conflicts_with = "payload")]
        hex_file: Option<PathBuf>,

        /// Output record path (JSON)
        #[arg(short = 'o', long, required_unless_present = "stdout")]
        report: Option<PathBuf>,

        /// Write the JSON record to stdout
        #[arg(long, conflicts_with = "report")]
        stdout: bool,

        /// Pretty-print JSON output
        #[arg(long, conflicts_with = "compact")]
        pretty: bool,

        /// Compact JSON output (default)
        #[arg(long)]
        compact: bool,

        /// LoRaWAN FPort of the uplink (recorded for interface parity, does not affect decoding)
        #[arg(long)]
        port: Option<u8>,

        /// Emit the bare data mapping of the legacy v2 convention (drops warnings)
        #[arg(long, conflicts_with = "strict")]
        legacy: bool,

        /// Exit with a non-zero code if the record carries warnings
        #[arg(long)]
        strict: bool,

        /// Suppress non-error output
        #[arg(long)]
        quiet: bool,
    },
    /// Encode a GPS sample into the 9-byte payload, as uppercase hex.
    #[command(
        after_help = "Examples:\n  lorafix payload encode --latitude 52.520008 --longitude 13.404954 --altitude 50 --hdop 1.2\n  lorafix payload encode --latitude -7.34 --longitude 5.38 --altitude 0 --hdop 2.5 -o payload.hex"
    )]
    Encode {
        /// Latitude in decimal degrees
        #[arg(long, allow_negative_numbers = true)]
        latitude: f64,

        /// Longitude in decimal degrees
        #[arg(long, allow_negative_numbers = true)]
        longitude: f64,

        /// Altitude in metres
        #[arg(long, allow_negative_numbers = true)]
        altitude: f64,

        /// Horizontal dilution of precision
        #[arg(long, allow_negative_numbers = true)]
        hdop: f64,

        /// Output payload path (hex text); defaults to stdout
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,

        /// Suppress non-error output
        #[arg(long)]
        quiet: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Payload { command } => match command {
            PayloadCommands::Decode {
                payload,
                hex_file,
                report,
                stdout,
                pretty,
                compact,
                port,
                legacy,
                strict,
                quiet,
            } => cmd_payload_decode(
                payload, hex_file, report, stdout, pretty, compact, port, legacy, strict, quiet,
            ),
            PayloadCommands::Encode {
                latitude,
                longitude,
                altitude,
                hdop,
                output,
                quiet,
            } => cmd_payload_encode(latitude, longitude, altitude, hdop, output, quiet),
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(2)
        }
    }
}

#[derive(Debug)]
struct CliError {
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn new(message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            message: message.into(),
            hint,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::new(err.to_string(), None)
    }
}

fn cmd_payload_decode(
    payload: Option<String>,
    hex_file: Option<PathBuf>,
    report: Option<PathBuf>,
    stdout: bool,
    pretty: bool,
    compact: bool,
    port: Option<u8>,
    legacy: bool,
    strict: bool,
    quiet: bool,
) -> Result<(), CliError> {
    let report = if stdout {
        None
    } else {
        Some(report.ok_or_else(|| {
            CliError::new(
                "missing output path",
                Some("use -o/--report or --stdout".to_string()),
            )
        })?)
    };

    if let (Some(hex_path), Some(report_path)) = (hex_file.as_deref(), report.as_deref()) {
        if same_file(hex_path, report_path) {
            return Err(CliError::new(
                format!(
                    "record path must differ from input: {}",
                    report_path.display()
                ),
                Some("choose a different output path".to_string()),
            ));
        }
    }

    let bytes = load_payload_bytes(payload.as_deref(), hex_file.as_deref())?;

    if legacy {
        let json = match decode_v2(&bytes, port.unwrap_or(1)) {
            Some(fix) => serialize_json(&fix, pretty, compact)?,
            None => serialize_json(&serde_json::Map::new(), pretty, compact)?,
        };
        return write_record(json, report, quiet);
    }

    let decoded = decode_uplink(&UplinkInput {
        bytes,
        f_port: port,
    });
    let json = serialize_json(&decoded, pretty, compact)?;
    write_record(json, report, quiet)?;

    if strict && !decoded.warnings.is_empty() {
        return Err(CliError::new(
            "payload warnings detected",
            Some("inspect the warnings array in the record".to_string()),
        ));
    }
    Ok(())
}

fn cmd_payload_encode(
    latitude: f64,
    longitude: f64,
    altitude: f64,
    hdop: f64,
    output: Option<PathBuf>,
    quiet: bool,
) -> Result<(), CliError> {
    for (name, value) in [
        ("latitude", latitude),
        ("longitude", longitude),
        ("altitude", altitude),
        ("hdop", hdop),
    ] {
        if !value.is_finite() {
            return Err(CliError::new(
                format!("--{} must be finite, got {}", name, value),
                Some("pass plain decimal numbers".to_string()),
            ));
        }
    }

    let sample = GpsSample {
        latitude,
        longitude,
        altitude,
        hdop,
    };
    let payload = encode_gps_sample(&sample);
    let hex: String = payload.iter().map(|byte| format!("{:02X}", byte)).collect();

    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent).with_context(|| {
                        format!("Failed to create output directory: {}", parent.display())
                    })?;
                }
            }
            fs::write(&path, format!("{}\n", hex))
                .with_context(|| format!("Failed to write payload: {}", path.display()))?;
            if !quiet {
                eprintln!("OK: payload written -> {}", path.display());
            }
        }
        None => println!("{}", hex),
    }
    Ok(())
}

fn load_payload_bytes(
    payload: Option<&str>,
    hex_file: Option<&Path>,
) -> Result<Vec<u8>, CliError> {
    if let Some(path) = hex_file {
        return read_hex_file(path).map_err(|err| {
            CliError::new(
                format!("failed to read payload from {}: {}", path.display(), err),
                hex_hint(&err),
            )
        });
    }
    let payload = payload.expect("payload required when --hex-file is absent");
    parse_hex_payload(payload).map_err(|err| CliError::new(err.to_string(), hex_hint(&err)))
}

fn hex_hint(err: &SourceError) -> Option<String> {
    match err {
        SourceError::Io(_) => Some("check the file path".to_string()),
        SourceError::InvalidHexDigit { .. } | SourceError::OddDigitCount { .. } => {
            Some("payloads are hex text like 758EBB83D3D000320C".to_string())
        }
    }
}

fn serialize_json<T: serde::Serialize>(
    value: &T,
    pretty: bool,
    compact: bool,
) -> Result<String, CliError> {
    if pretty && compact {
        return Err(CliError::new(
            "cannot use --pretty and --compact together",
            Some("choose one output format".to_string()),
        ));
    }
    if pretty {
        serde_json::to_string_pretty(value)
            .context("JSON serialization failed")
            .map_err(Into::into)
    } else {
        serde_json::to_string(value)
            .context("JSON serialization failed")
            .map_err(Into::into)
    }
}

fn write_record(json: String, report: Option<PathBuf>, quiet: bool) -> Result<(), CliError> {
    match report {
        None => {
            print!("{}", json);
            Ok(())
        }
        Some(report) => {
            if let Some(parent) = report.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent).with_context(|| {
                        format!("Failed to create output directory: {}", parent.display())
                    })?;
                }
            }
            fs::write(&report, json)
                .with_context(|| format!("Failed to write record: {}", report.display()))?;
            if !quiet {
                eprintln!("OK: record written -> {}", report.display());
            }
            Ok(())
        }
    }
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
