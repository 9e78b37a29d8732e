//! issuedeck CLI entrypoint.

use std::io::{self, Write};
use std::process::ExitCode;

use issuedeck::{IntakeError, IssueDeckConfig};
use ortho_config::OrthoConfig;

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), IntakeError> {
    let config = load_config()?;
    config.validate()?;

    let context = cli::build_view_context(&config)?;
    if config.summary {
        cli::summary::run(context).await
    } else {
        cli::view_tui::run(context).await
    }
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`IntakeError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<IssueDeckConfig, IntakeError> {
    IssueDeckConfig::load().map_err(|error| IntakeError::Configuration {
        message: error.to_string(),
    })
}
