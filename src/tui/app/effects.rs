//! Request commands for state machine effects.
//!
//! Each effect becomes one bubbletea command. The command runs the gateway
//! calls, records latency telemetry and reports the outcome as an
//! [`AppMsg`] that is fed back through `update()`.

use std::any::Any;
use std::time::Instant;

use bubbletea_rs::Cmd;

use super::RepositoryApp;
use crate::github::error::IntakeError;
use crate::github::gateway::ListIssuesParams;
use crate::telemetry::TelemetryEvent;
use crate::tui::messages::AppMsg;
use crate::tui::state::{Effect, RequestId};
use crate::tui::storage::ViewContext;

impl RepositoryApp {
    /// Converts effects into a single command, batching when there are
    /// several.
    pub(super) fn commands_for(&self, effects: Vec<Effect>) -> Option<Cmd> {
        let mut commands: Vec<Cmd> = effects
            .into_iter()
            .map(|effect| self.command_for(effect))
            .collect();
        if commands.len() > 1 {
            return Some(bubbletea_rs::batch(commands));
        }
        commands.pop()
    }

    fn command_for(&self, effect: Effect) -> Cmd {
        let Some(context) = self.context.clone() else {
            return Self::missing_context_cmd(effect);
        };
        match effect {
            Effect::LoadInitial { params } => load_initial_cmd(context, params),
            Effect::FetchIssues { request, params } => fetch_issues_cmd(context, request, params),
        }
    }

    fn missing_context_cmd(effect: Effect) -> Cmd {
        let error = IntakeError::Configuration {
            message: "view context not configured".to_owned(),
        };
        tracing::warn!(%error, "cannot execute view effect");
        let msg = match effect {
            Effect::LoadInitial { .. } => AppMsg::from_initial_error(&error),
            Effect::FetchIssues { request, .. } => AppMsg::IssuesFailed {
                request,
                message: error.to_string(),
            },
        };
        Box::pin(async move { Some(Box::new(msg) as Box<dyn Any + Send>) })
    }

    /// Records that a response was dropped in favour of a newer request.
    pub(super) fn record_stale_discard(&self, request: RequestId, latest: RequestId) {
        tracing::debug!(
            request = request.get(),
            latest = latest.get(),
            "discarding stale issue response"
        );
        if let Some(context) = &self.context {
            context
                .telemetry
                .record(TelemetryEvent::StaleResponseDiscarded {
                    request_id: request.get(),
                    latest_request_id: latest.get(),
                });
        }
    }
}

/// Fetches repository metadata and the first issue page concurrently and
/// reports both together.
fn load_initial_cmd(context: ViewContext, params: ListIssuesParams) -> Cmd {
    Box::pin(async move {
        let start = Instant::now();
        let (repository, issues) = tokio::join!(
            context.gateway.repository(&context.locator),
            context.gateway.list_issues(&context.locator, &params),
        );

        let msg = match (repository, issues) {
            (Ok(repository), Ok(issues)) => {
                context
                    .telemetry
                    .record(TelemetryEvent::InitialLoadCompleted {
                        latency_ms: elapsed_ms(start),
                        issue_count: issues.len(),
                    });
                AppMsg::InitialLoaded { repository, issues }
            }
            (Err(error), _) | (_, Err(error)) => {
                tracing::warn!(%error, "initial repository load failed");
                AppMsg::from_initial_error(&error)
            }
        };
        Some(Box::new(msg) as Box<dyn Any + Send>)
    })
}

/// Fetches one issue page for a numbered refetch.
fn fetch_issues_cmd(context: ViewContext, request: RequestId, params: ListIssuesParams) -> Cmd {
    Box::pin(async move {
        let start = Instant::now();
        let msg = match context.gateway.list_issues(&context.locator, &params).await {
            Ok(issues) => {
                context.telemetry.record(TelemetryEvent::IssuesFetched {
                    request_id: request.get(),
                    filter: params.state.as_str().to_owned(),
                    page: params.page.unwrap_or(1),
                    issue_count: issues.len(),
                    latency_ms: elapsed_ms(start),
                });
                AppMsg::IssuesLoaded { request, issues }
            }
            Err(error) => {
                tracing::warn!(%error, request = request.get(), "issue refetch failed");
                AppMsg::IssuesFailed {
                    request,
                    message: error.to_string(),
                }
            }
        };
        Some(Box::new(msg) as Box<dyn Any + Send>)
    })
}

fn elapsed_ms(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}
