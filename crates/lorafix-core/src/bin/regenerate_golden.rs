use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use lorafix_core::{UplinkInput, decode_uplink, read_hex_file};

fn main() -> ExitCode {
    if let Err(err) = run() {
        eprintln!("error: {}", err);
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

fn run() -> Result<(), String> {
    let root = PathBuf::from("tests").join("golden");
    let entries =
        fs::read_dir(&root).map_err(|err| format!("failed to read {}: {}", root.display(), err))?;

    for entry in entries {
        let entry = entry.map_err(|err| format!("failed to read entry: {}", err))?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        let input = path.join("input.hex");
        if !input.exists() {
            continue;
        }
        let output = path.join("expected_uplink.json");
        regenerate_one(&input, &output)?;
        println!("regenerated {}", output.display());
    }

    Ok(())
}

fn regenerate_one(input: &Path, output: &Path) -> Result<(), String> {
    let bytes = read_hex_file(input)
        .map_err(|err| format!("hex parse failed for {}: {}", input.display(), err))?;
    let decoded = decode_uplink(&UplinkInput {
        bytes,
        f_port: None,
    });
    let json = serde_json::to_string(&decoded)
        .map_err(|err| format!("JSON serialization failed: {}", err))?;
    fs::write(output, json)
        .map_err(|err| format!("failed to write {}: {}", output.display(), err))?;
    Ok(())
}
