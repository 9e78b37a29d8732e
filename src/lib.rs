//! issuedeck library crate providing a terminal view of a repository's
//! issues.
//!
//! The library wraps Octocrab to decode repository identifiers, fetch
//! repository metadata and issue pages, and drives a bubbletea-rs view whose
//! request ordering is decided by a pure state machine.

pub mod config;
pub mod github;
pub mod telemetry;
pub mod tui;

pub use config::IssueDeckConfig;
pub use github::{
    IntakeError, Issue, IssueGateway, IssueState, ListIssuesParams, OctocrabIssueGateway,
    RepositoryInfo, RepositoryLocator,
};
