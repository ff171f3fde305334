//! Arabic proofreader command line
//!
//! Runs the service endpoints locally and prints the JSON response body.
//!
//! Usage:
//!   cargo run --bin proofread -- upload thesis.pdf
//!   cargo run --bin proofread -- proofread "هذا النص كتير حلو."
//!   cargo run --bin proofread -- analyze --file chapter.txt
//!   cargo run --bin proofread -- health
//!
//! Set `PROOFREAD_MAX_FILE_SIZE` (bytes) to change the upload limit and
//! `RUST_LOG=debug` to trace each pass.

use arabic_proofreader::api::{ApiResponse, ProofreaderService};
use arabic_proofreader::ProofreaderConfig;
use serde_json::json;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

enum Command {
    Upload(PathBuf),
    Proofread(String),
    Analyze(String),
    Health,
}

const USAGE: &str = "Usage: proofread <upload PATH | proofread TEXT | proofread --file PATH | analyze TEXT | analyze --file PATH | health>";

impl Command {
    fn from_args() -> Result<Self, String> {
        let args: Vec<String> = std::env::args().skip(1).collect();
        let (name, rest) = args.split_first().ok_or_else(|| USAGE.to_string())?;

        match name.as_str() {
            "upload" => match rest {
                [path] => Ok(Command::Upload(PathBuf::from(path))),
                _ => Err(USAGE.to_string()),
            },
            "proofread" => text_argument(rest).map(Command::Proofread),
            "analyze" => text_argument(rest).map(Command::Analyze),
            "health" => Ok(Command::Health),
            "--help" | "-h" => Err(USAGE.to_string()),
            other => Err(format!("Unknown command '{}'\n{}", other, USAGE)),
        }
    }
}

/// Either the inline text (remaining args joined by spaces) or `--file PATH`.
fn text_argument(rest: &[String]) -> Result<String, String> {
    match rest {
        [flag, path] if flag == "--file" => std::fs::read_to_string(path)
            .map_err(|e| format!("Error reading {}: {}", path, e)),
        [] => Err(USAGE.to_string()),
        words => Ok(words.join(" ")),
    }
}

fn upload(service: &ProofreaderService, path: &Path) -> Result<ApiResponse, String> {
    let bytes = std::fs::read(path).map_err(|e| format!("Error reading {}: {}", path.display(), e))?;
    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok(service.upload(&bytes, &filename))
}

fn main() -> ExitCode {
    env_logger::init();

    let command = match Command::from_args() {
        Ok(command) => command,
        Err(message) => {
            eprintln!("{}", message);
            return ExitCode::from(2);
        },
    };

    let service = ProofreaderService::with_config(ProofreaderConfig::from_env());

    let response = match command {
        Command::Upload(path) => match upload(&service, &path) {
            Ok(response) => response,
            Err(message) => {
                eprintln!("{}", message);
                return ExitCode::FAILURE;
            },
        },
        Command::Proofread(text) => service.proofread(&json!({ "text": text })),
        Command::Analyze(text) => service.analyze(&json!({ "text": text })),
        Command::Health => service.health(),
    };

    match serde_json::to_string_pretty(&response.body) {
        Ok(body) => println!("{}", body),
        Err(e) => {
            eprintln!("Error rendering response: {}", e);
            return ExitCode::FAILURE;
        },
    }

    if response.is_success() {
        ExitCode::SUCCESS
    } else {
        log::warn!("Request finished with status {}", response.status);
        ExitCode::FAILURE
    }
}
