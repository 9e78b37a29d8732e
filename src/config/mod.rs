//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.issuedeck.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `ISSUEDECK_REPOSITORY`,
//!    `ISSUEDECK_API_BASE`, `ISSUEDECK_PER_PAGE`
//! 4. **Command-line arguments** – `--repository`/`-r` and friends
//!
//! # Configuration File
//!
//! ```toml
//! repository = "facebook/react"
//! api_base = "https://api.github.com"
//! per_page = 30
//! discard_stale_responses = false
//! ```

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::github::error::IntakeError;
use crate::github::gateway::DEFAULT_PER_PAGE;
use crate::github::locator::{DEFAULT_API_BASE, RepositoryLocator};
use crate::tui::state::ResponsePolicy;

/// Largest page size the issues endpoint accepts.
const MAX_PER_PAGE: u8 = 100;

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Environment Variables
///
/// - `ISSUEDECK_REPOSITORY` or `--repository`: Repository identifier
/// - `ISSUEDECK_API_BASE` or `--api-base`: REST API base URL
/// - `ISSUEDECK_PER_PAGE` or `--per-page`: Issues per page
///
/// # Example
///
/// ```no_run
/// use issuedeck::IssueDeckConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = IssueDeckConfig::load().expect("failed to load configuration");
/// let locator = config.require_repository().expect("repository required");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "ISSUEDECK",
    discovery(
        dotfile_name = ".issuedeck.toml",
        config_file_name = "issuedeck.toml",
        app_name = "issuedeck"
    )
)]
pub struct IssueDeckConfig {
    /// Repository to view, as `owner/name` (percent-encoding accepted) or a
    /// repository URL.
    ///
    /// Can be provided via:
    /// - CLI: `--repository <REPO>` or `-r <REPO>`
    /// - Environment: `ISSUEDECK_REPOSITORY`
    /// - Config file: `repository = "..."`
    #[ortho_config(cli_short = 'r')]
    pub repository: Option<String>,

    /// Base URL of the REST API.
    ///
    /// Ignored when `repository` is a URL on a non-github.com host, in which
    /// case the Enterprise API base is derived from that host.
    #[ortho_config()]
    pub api_base: String,

    /// Issues requested per page (1..=100).
    #[ortho_config()]
    pub per_page: u8,

    /// Drops issue responses that answer anything but the newest request.
    ///
    /// When unset, the last response to arrive is shown even if it answers
    /// an older request.
    ///
    /// Note: Environment variable `ISSUEDECK_DISCARD_STALE_RESPONSES` is not
    /// supported because `ortho_config` does not load boolean values from
    /// the environment.
    #[ortho_config()]
    pub discard_stale_responses: bool,

    /// Prints one rendered frame after the initial load instead of starting
    /// the interactive view.
    ///
    /// Can be provided via:
    /// - CLI: `--summary` / `-s`
    /// - Config file: `summary = true`
    #[ortho_config(cli_short = 's')]
    pub summary: bool,

    /// Writes telemetry events to stderr as JSON lines.
    ///
    /// Only valid together with `summary`; the interactive view owns the
    /// terminal.
    #[ortho_config()]
    pub telemetry: bool,
}

impl Default for IssueDeckConfig {
    fn default() -> Self {
        Self {
            repository: None,
            api_base: DEFAULT_API_BASE.to_owned(),
            per_page: DEFAULT_PER_PAGE,
            discard_stale_responses: false,
            summary: false,
            telemetry: false,
        }
    }
}

impl IssueDeckConfig {
    /// Validates values that ortho-config cannot check on its own.
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError::Configuration`] when `per_page` is outside
    /// 1..=100, `api_base` is empty, or `telemetry` is set without
    /// `summary`.
    pub fn validate(&self) -> Result<(), IntakeError> {
        if self.per_page == 0 || self.per_page > MAX_PER_PAGE {
            return Err(IntakeError::Configuration {
                message: format!(
                    "per_page must be between 1 and {MAX_PER_PAGE}, got {}",
                    self.per_page
                ),
            });
        }

        if self.api_base.trim().is_empty() {
            return Err(IntakeError::Configuration {
                message: "api_base must not be empty".to_owned(),
            });
        }

        if self.telemetry && !self.summary {
            return Err(IntakeError::Configuration {
                message: "telemetry requires summary mode".to_owned(),
            });
        }

        Ok(())
    }

    /// Response reconciliation policy selected by `discard_stale_responses`.
    #[must_use]
    pub const fn response_policy(&self) -> ResponsePolicy {
        if self.discard_stale_responses {
            ResponsePolicy::LatestRequestWins
        } else {
            ResponsePolicy::LastResolvedWins
        }
    }

    /// Decodes the configured repository into a locator.
    ///
    /// Owner/name identifiers use `api_base`; repository URLs carry their
    /// own API base unless it is the public GitHub one, in which case a
    /// configured `api_base` still applies.
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError::MissingRepository`] when no repository is
    /// configured, or the parse error for a malformed identifier or base.
    pub fn require_repository(&self) -> Result<RepositoryLocator, IntakeError> {
        let input = self
            .repository
            .as_deref()
            .ok_or(IntakeError::MissingRepository)?;
        let locator = RepositoryLocator::parse(input)?;

        if locator.api_base().as_str().trim_end_matches('/') == DEFAULT_API_BASE {
            locator.with_api_base(&self.api_base)
        } else {
            Ok(locator)
        }
    }
}

#[cfg(test)]
mod tests;
