//! Simple CLI that reads a JSON request from stdin and writes a JSON
//! response to stdout.
//!
//! Request:  `{"text": "...", "mode": "smart" | "first" | "length" | ...}`
//! Response: `{"summary": "..."}` or `{"error": "..."}` (exit code 1)
//!
//! Set `RS_SUMMARIZE_OPTIONS` to a JSON options file to override defaults.
//! Logging goes to stderr and is controlled by `RUST_LOG`.

use std::io::{self, Read};
use std::process::ExitCode;

use rs_summarize::{encoding, summarize_with_options, Error, Mode, Options};
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

const OPTIONS_ENV: &str = "RS_SUMMARIZE_OPTIONS";

#[derive(Deserialize)]
struct Request {
    text: Option<String>,
    mode: Option<String>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum Response {
    Summary { summary: String },
    Error { error: String },
}

fn load_options() -> Result<Options, Error> {
    match std::env::var_os(OPTIONS_ENV) {
        Some(path) => Options::from_json_file(path),
        None => Ok(Options::default()),
    }
}

fn handle(input: &[u8], options: &Options) -> Response {
    let body = encoding::decode_text(input);
    let request: Request = match serde_json::from_str(&body) {
        Ok(request) => request,
        Err(err) => {
            tracing::warn!("rejecting request: {err}");
            return Response::Error {
                error: "Invalid JSON".to_string(),
            };
        }
    };

    let text = request.text.unwrap_or_default();
    let mode = Mode::parse(request.mode.as_deref());
    tracing::info!(mode = %mode, chars = text.chars().count(), "summarizing request");

    Response::Summary {
        summary: summarize_with_options(&text, mode, options),
    }
}

fn emit(response: &Response) -> ExitCode {
    match serde_json::to_string(response) {
        Ok(json) => println!("{json}"),
        Err(err) => {
            tracing::error!("failed to encode response: {err}");
            return ExitCode::FAILURE;
        }
    }

    match response {
        Response::Summary { .. } => ExitCode::SUCCESS,
        Response::Error { .. } => ExitCode::FAILURE,
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let options = match load_options() {
        Ok(options) => options,
        Err(err) => {
            tracing::error!("{OPTIONS_ENV}: {err}");
            return emit(&Response::Error {
                error: err.to_string(),
            });
        }
    };

    let mut input = Vec::new();
    if let Err(err) = io::stdin().read_to_end(&mut input) {
        tracing::error!("failed to read stdin: {err}");
        return emit(&Response::Error {
            error: "Failed to read stdin".to_string(),
        });
    }

    emit(&handle(&input, &options))
}
