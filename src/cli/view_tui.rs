//! Interactive repository view.
//!
//! This module provides the entry point for the terminal user interface
//! that shows a repository's issues with filter and pagination controls.

use std::io::{self, Write};

use bubbletea_rs::Program;

use issuedeck::IntakeError;
use issuedeck::tui::{RepositoryApp, ViewContext, set_initial_terminal_size, set_view_context};

/// Runs the interactive repository view.
///
/// # Errors
///
/// Returns an error if the TUI fails to initialise or exits abnormally.
pub async fn run(context: ViewContext) -> Result<(), IntakeError> {
    // Store the context in global state for Model::init() to retrieve.
    // If already set, this is a no-op and the existing context remains.
    let _ = set_view_context(context);

    if let Ok((width, height)) = crossterm::terminal::size() {
        let _ = set_initial_terminal_size(width, height);
    }

    run_tui().await.map_err(|error| IntakeError::Terminal {
        message: error.to_string(),
    })
}

/// Runs the bubbletea-rs program with the `RepositoryApp` model.
async fn run_tui() -> Result<(), bubbletea_rs::Error> {
    // RepositoryApp::init() will retrieve the context from module-level storage.
    let program = Program::<RepositoryApp>::builder().alt_screen(true).build()?;

    program.run().await?;

    io::stdout().flush().ok();

    Ok(())
}
