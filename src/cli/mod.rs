//! CLI operation mode handlers.
//!
//! This module contains the implementations for the two operation modes:
//! - [`view_tui`]: Interactive repository view
//! - [`summary`]: One rendered frame after the initial load

use std::sync::Arc;

use issuedeck::telemetry::{NoopTelemetrySink, StderrJsonlTelemetrySink, TelemetrySink};
use issuedeck::tui::ViewContext;
use issuedeck::{IntakeError, IssueDeckConfig, OctocrabIssueGateway};

pub mod summary;
pub mod view_tui;

/// Builds the view context described by the configuration.
///
/// # Errors
///
/// Returns an error if the repository is missing or malformed, or if the
/// Octocrab client cannot be constructed.
pub fn build_view_context(config: &IssueDeckConfig) -> Result<ViewContext, IntakeError> {
    let locator = config.require_repository()?;
    let gateway = OctocrabIssueGateway::for_locator(&locator)?;
    tracing::debug!(
        repository = %locator.repo_name(),
        api_base = %locator.api_base(),
        "configured repository view"
    );

    Ok(ViewContext::new(Arc::new(gateway), locator)
        .with_policy(config.response_policy())
        .with_per_page(config.per_page)
        .with_telemetry(telemetry_sink(config)))
}

fn telemetry_sink(config: &IssueDeckConfig) -> Arc<dyn TelemetrySink> {
    if config.telemetry {
        Arc::new(StderrJsonlTelemetrySink)
    } else {
        Arc::new(NoopTelemetrySink)
    }
}
