//! Non-interactive summary mode.
//!
//! Mounts the repository view, drives its initial load to completion and
//! writes one rendered frame to stdout.

use std::io::{self, Write};

use bubbletea_rs::Model;

use issuedeck::IntakeError;
use issuedeck::tui::messages::AppMsg;
use issuedeck::tui::state::ViewState;
use issuedeck::tui::{RepositoryApp, ViewContext};

/// Frame width used for summary output.
const SUMMARY_WIDTH: u16 = 120;

/// Loads the view and prints its first frame.
///
/// # Errors
///
/// Returns [`IntakeError::ViewLoadFailed`] when the initial load fails, or
/// [`IntakeError::Io`] when stdout cannot be written.
pub async fn run(context: ViewContext) -> Result<(), IntakeError> {
    let app = load(context).await;

    if let ViewState::Failed { message } = app.view_state() {
        return Err(IntakeError::ViewLoadFailed {
            message: message.clone(),
        });
    }

    let mut stdout = io::stdout().lock();
    write!(stdout, "{}", app.render()).map_err(|error| IntakeError::Io {
        message: error.to_string(),
    })
}

/// Mounts a view and feeds command results back until none remain.
async fn load(context: ViewContext) -> RepositoryApp {
    let mut app = RepositoryApp::with_context(context).with_dimensions(SUMMARY_WIDTH, u16::MAX);
    let mut pending = app.handle_message(&AppMsg::Mount);

    while let Some(cmd) = pending.take() {
        let Some(msg) = cmd.await else {
            break;
        };
        pending = app.update(msg);
    }

    app
}
