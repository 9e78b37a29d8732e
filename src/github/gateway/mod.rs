//! Gateways for loading repository data through Octocrab.
//!
//! The repository view depends only on the [`IssueGateway`] trait so tests
//! can substitute a mock or stub while the Octocrab implementation handles
//! real HTTP requests.

mod client;
mod error_mapping;
mod issues;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use issues::{DEFAULT_PER_PAGE, IssueState, ListIssuesParams, OctocrabIssueGateway};

use async_trait::async_trait;

use crate::github::error::IntakeError;
use crate::github::locator::RepositoryLocator;
use crate::github::models::{Issue, RepositoryInfo};

/// Gateway that can load repository metadata and issue pages.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IssueGateway: Send + Sync {
    /// Fetch repository metadata (`GET /repos/{owner}/{name}`).
    async fn repository(&self, locator: &RepositoryLocator) -> Result<RepositoryInfo, IntakeError>;

    /// Fetch one page of issues (`GET /repos/{owner}/{name}/issues`).
    async fn list_issues(
        &self,
        locator: &RepositoryLocator,
        params: &ListIssuesParams,
    ) -> Result<Vec<Issue>, IntakeError>;
}
