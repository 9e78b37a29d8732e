//! Octocrab-backed gateway for repository metadata and issue listings.

use async_trait::async_trait;
use octocrab::{Octocrab, Page};

use crate::github::error::IntakeError;
use crate::github::locator::RepositoryLocator;
use crate::github::models::{ApiIssue, ApiRepository, Issue, RepositoryInfo};
use crate::github::rate_limit::RateLimitInfo;

use super::IssueGateway;
use super::client::build_octocrab_client;
use super::error_mapping::{is_rate_limit_error, map_octocrab_error};

mod types;

pub use types::{DEFAULT_PER_PAGE, IssueState, ListIssuesParams};

/// Octocrab-backed issue gateway.
pub struct OctocrabIssueGateway {
    client: Octocrab,
}

impl OctocrabIssueGateway {
    /// Creates a new gateway from an Octocrab client.
    #[must_use]
    pub const fn new(client: Octocrab) -> Self {
        Self { client }
    }

    /// Builds an anonymous client for the locator's API base.
    ///
    /// # Errors
    ///
    /// Returns `IntakeError::InvalidUrl` when the base URI cannot be parsed or
    /// `IntakeError::Api` when Octocrab fails to construct a client.
    pub fn for_locator(locator: &RepositoryLocator) -> Result<Self, IntakeError> {
        let octocrab = build_octocrab_client(locator.api_base().as_str())?;
        Ok(Self::new(octocrab))
    }
}

#[async_trait]
impl IssueGateway for OctocrabIssueGateway {
    async fn repository(&self, locator: &RepositoryLocator) -> Result<RepositoryInfo, IntakeError> {
        let path = locator.repository_path();
        tracing::debug!(%path, "fetching repository metadata");

        match self
            .client
            .get::<ApiRepository, _, _>(path, None::<&()>)
            .await
        {
            Ok(repository) => Ok(repository.into()),
            Err(error) => Err(self
                .map_octocrab_error_with_rate_limit("repository", &error)
                .await),
        }
    }

    async fn list_issues(
        &self,
        locator: &RepositoryLocator,
        params: &ListIssuesParams,
    ) -> Result<Vec<Issue>, IntakeError> {
        validate_pagination_params(params)?;

        let path = locator.issues_path();
        let query_params = params.query_pairs();
        tracing::debug!(
            %path,
            state = params.state.as_str(),
            page = ?params.page,
            "fetching issues"
        );

        let page_result: Page<ApiIssue> = match self
            .client
            .get(path, Some(&query_params))
            .await
        {
            Ok(page_result) => page_result,
            Err(error) => {
                return Err(self
                    .map_octocrab_error_with_rate_limit("list issues", &error)
                    .await);
            }
        };

        Ok(page_result.items.into_iter().map(Issue::from).collect())
    }
}

impl OctocrabIssueGateway {
    async fn map_octocrab_error_with_rate_limit(
        &self,
        operation: &str,
        error: &octocrab::Error,
    ) -> IntakeError {
        match error {
            octocrab::Error::GitHub { source, .. } if is_rate_limit_error(source) => {
                let rate_limit = self.fetch_rate_limit_info().await;
                let base_message =
                    format!("{operation} failed: {message}", message = source.message);
                let message = match &rate_limit {
                    Some(info) => format!(
                        "{base_message} (resets at {reset})",
                        reset = info.reset_at()
                    ),
                    None => base_message,
                };
                tracing::warn!(%message, "GitHub rate limit exhausted");

                IntakeError::RateLimitExceeded {
                    rate_limit,
                    message,
                }
            }
            _ => map_octocrab_error(operation, error),
        }
    }

    async fn fetch_rate_limit_info(&self) -> Option<RateLimitInfo> {
        let rate = self.client.ratelimit().get().await.ok()?.rate;
        let Ok(limit) = u32::try_from(rate.limit) else {
            return None;
        };
        let Ok(remaining) = u32::try_from(rate.remaining) else {
            return None;
        };
        Some(RateLimitInfo::new(limit, remaining, rate.reset))
    }
}

fn validate_pagination_params(params: &ListIssuesParams) -> Result<(), IntakeError> {
    if params.page == Some(0) {
        return Err(IntakeError::InvalidPagination {
            message: "page must be at least 1".to_owned(),
        });
    }

    if params.per_page == 0 {
        return Err(IntakeError::InvalidPagination {
            message: "per_page must be at least 1".to_owned(),
        });
    }

    if params.per_page > 100 {
        return Err(IntakeError::InvalidPagination {
            message: "per_page must not exceed 100".to_owned(),
        });
    }

    Ok(())
}
