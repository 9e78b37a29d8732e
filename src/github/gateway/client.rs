//! Octocrab client construction for gateway implementations.

use http::Uri;
use octocrab::Octocrab;

use crate::github::error::IntakeError;

use super::error_mapping::map_octocrab_error;

/// Builds an anonymous Octocrab client for the given API base URL.
///
/// # Errors
///
/// Returns `IntakeError::InvalidUrl` when the base URI cannot be parsed or
/// `IntakeError::Api` when Octocrab fails to construct a client.
pub(super) fn build_octocrab_client(api_base: &str) -> Result<Octocrab, IntakeError> {
    let base_uri: Uri = api_base
        .parse::<Uri>()
        .map_err(|error| IntakeError::InvalidUrl(error.to_string()))?;

    Octocrab::builder()
        .base_uri(base_uri)
        .map_err(|error| IntakeError::Api {
            message: format!("build client failed: {error}"),
        })?
        .build()
        .map_err(|error| map_octocrab_error("build client", &error))
}
