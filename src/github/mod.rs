//! GitHub REST access for the repository view.
//!
//! This module wraps Octocrab to decode repository identifiers, fetch
//! repository metadata and issue pages, and map failures into
//! [`IntakeError`] variants the view can display without exposing Octocrab
//! internals.

pub mod error;
pub mod gateway;
pub mod locator;
pub mod models;
pub mod rate_limit;

pub use error::IntakeError;
pub use gateway::{
    DEFAULT_PER_PAGE, IssueGateway, IssueState, ListIssuesParams, OctocrabIssueGateway,
};
pub use locator::{RepositoryLocator, RepositoryName, RepositoryOwner};
pub use models::{Account, Issue, ItemId, Label, RepositoryInfo};

#[cfg(test)]
pub use gateway::MockIssueGateway;
