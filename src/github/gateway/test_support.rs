//! In-memory gateway for exercising the view without HTTP.

use std::sync::Mutex;

use async_trait::async_trait;

use super::{IssueGateway, ListIssuesParams};
use crate::github::error::IntakeError;
use crate::github::locator::RepositoryLocator;
use crate::github::models::{Issue, RepositoryInfo};

/// Gateway returning canned data and recording every issue request.
///
/// Every issue call returns a clone of the configured list; tests assert on
/// [`StubIssueGateway::issue_requests`] to see what was asked for.
#[derive(Debug, Default)]
pub struct StubIssueGateway {
    repository: Option<RepositoryInfo>,
    issues: Vec<Issue>,
    failure: Option<IntakeError>,
    issue_requests: Mutex<Vec<ListIssuesParams>>,
}

impl StubIssueGateway {
    /// Creates a stub serving `repository` and `issues`.
    #[must_use]
    pub fn new(repository: RepositoryInfo, issues: Vec<Issue>) -> Self {
        Self {
            repository: Some(repository),
            issues,
            failure: None,
            issue_requests: Mutex::new(Vec::new()),
        }
    }

    /// Creates a stub whose every call fails with `error`.
    #[must_use]
    pub fn failing(error: IntakeError) -> Self {
        Self {
            failure: Some(error),
            ..Self::default()
        }
    }

    /// Issue requests received so far, in call order.
    #[must_use]
    pub fn issue_requests(&self) -> Vec<ListIssuesParams> {
        self.issue_requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl IssueGateway for StubIssueGateway {
    async fn repository(&self, _locator: &RepositoryLocator) -> Result<RepositoryInfo, IntakeError> {
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }
        Ok(self.repository.clone().unwrap_or_default())
    }

    async fn list_issues(
        &self,
        _locator: &RepositoryLocator,
        params: &ListIssuesParams,
    ) -> Result<Vec<Issue>, IntakeError> {
        if let Ok(mut requests) = self.issue_requests.lock() {
            requests.push(*params);
        }
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }
        Ok(self.issues.clone())
    }
}
