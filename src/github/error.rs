//! Error types exposed by the GitHub layer and the repository view.

use thiserror::Error;

use super::rate_limit::RateLimitInfo;

/// Errors surfaced while resolving input or communicating with GitHub.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IntakeError {
    /// No repository identifier was configured.
    #[error("repository is required (use --repository or -r)")]
    MissingRepository,

    /// The repository identifier did not decode to `owner/name`.
    #[error("repository must be given as owner/name: {input}")]
    InvalidRepository {
        /// The identifier as supplied, before decoding.
        input: String,
    },

    /// A URL could not be parsed.
    #[error("URL is invalid: {0}")]
    InvalidUrl(String),

    /// GitHub returned a non-success response.
    #[error("GitHub API error: {message}")]
    Api {
        /// Response detail from GitHub describing the failure.
        message: String,
    },

    /// Networking failed while calling GitHub.
    #[error("network error talking to GitHub: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// The unauthenticated request quota is exhausted.
    #[error("GitHub API rate limit exceeded: {message}")]
    RateLimitExceeded {
        /// Quota details when GitHub reported them.
        rate_limit: Option<RateLimitInfo>,
        /// Error message from GitHub.
        message: String,
    },

    /// Pagination parameters were out of range.
    #[error("invalid pagination: {message}")]
    InvalidPagination {
        /// Description of the invalid parameter.
        message: String,
    },

    /// Local I/O failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// Configuration could not be loaded or failed validation.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// The repository view could not load its initial content.
    #[error("{message}")]
    ViewLoadFailed {
        /// The load failure as displayed by the view.
        message: String,
    },

    /// The terminal program failed to start or exited abnormally.
    #[error("terminal UI error: {message}")]
    Terminal {
        /// Error detail from the TUI runtime.
        message: String,
    },
}
