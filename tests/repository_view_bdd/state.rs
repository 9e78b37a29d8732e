//! Scenario state and update-loop driving for the repository view BDD tests.

use std::sync::Arc;

use bubbletea_rs::Cmd;
use issuedeck::tui::ViewContext;
use issuedeck::tui::app::RepositoryApp;
use issuedeck::tui::messages::AppMsg;
use issuedeck::tui::state::ResponsePolicy;
use issuedeck::{IntakeError, OctocrabIssueGateway, RepositoryLocator};
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use wiremock::MockServer;

use super::runtime::{SharedRuntime, ensure_runtime_and_server};

/// State shared across steps in a repository view scenario.
#[derive(ScenarioState, Default)]
pub(crate) struct ViewScenario {
    pub(crate) runtime: Slot<SharedRuntime>,
    pub(crate) server: Slot<MockServer>,
    /// Policy the app is built with; the default applies when unset.
    pub(crate) policy: Slot<ResponsePolicy>,
    /// The TUI application model under test.
    pub(crate) app: Slot<RepositoryApp>,
    /// Commands issued by the app that have not been resolved yet.
    pub(crate) pending: Slot<Vec<Cmd>>,
}

impl ViewScenario {
    /// Returns the runtime, starting it and the mock server on first use.
    pub(crate) fn runtime_and_server(&self) -> SharedRuntime {
        ensure_runtime_and_server(&self.runtime, &self.server)
            .unwrap_or_else(|error| panic!("failed to initialise runtime and server: {error}"))
    }

    /// Builds an app that talks to the mock server about `owner/name`.
    pub(crate) fn build_app(&self, owner: &str, name: &str) -> Result<RepositoryApp, IntakeError> {
        let runtime = self.runtime_and_server();
        let server_url = self
            .server
            .with_ref(MockServer::uri)
            .ok_or_else(|| IntakeError::Api {
                message: "mock server URL missing".to_owned(),
            })?;
        let locator =
            RepositoryLocator::from_owner_repo(owner, name)?.with_api_base(&server_url)?;
        let gateway = runtime.block_on(async { OctocrabIssueGateway::for_locator(&locator) })?;
        let policy = self.policy.get().unwrap_or_default();

        let context = ViewContext::new(Arc::new(gateway), locator).with_policy(policy);
        Ok(RepositoryApp::with_context(context).with_dimensions(120, 60))
    }
}

/// Feeds `msg` to the app and queues the command it returns.
pub(crate) fn dispatch(scenario: &ViewScenario, msg: &AppMsg) {
    let cmd = scenario
        .app
        .with_mut(|app| app.handle_message(msg))
        .unwrap_or_else(|| panic!("app not initialised"));

    if let Some(issued) = cmd {
        let mut pending = scenario.pending.take().unwrap_or_default();
        pending.push(issued);
        scenario.pending.set(pending);
    }
}

/// Feeds `msg` to the app and runs the update loop until no commands remain.
pub(crate) fn dispatch_and_settle(scenario: &ViewScenario, msg: &AppMsg) {
    dispatch(scenario, msg);
    settle(scenario);
}

/// Resolves every queued command, then applies the results newest first.
pub(crate) fn apply_pending_reversed(scenario: &ViewScenario) {
    let runtime = scenario.runtime_and_server();
    let pending = scenario.pending.take().unwrap_or_default();
    let mut messages: Vec<AppMsg> = pending
        .into_iter()
        .filter_map(|cmd| resolve(&runtime, cmd))
        .collect();
    messages.reverse();

    for msg in &messages {
        dispatch(scenario, msg);
    }
    settle(scenario);
}

fn settle(scenario: &ViewScenario) {
    let runtime = scenario.runtime_and_server();
    while let Some(pending) = scenario.pending.take() {
        if pending.is_empty() {
            break;
        }
        for cmd in pending {
            if let Some(msg) = resolve(&runtime, cmd) {
                dispatch(scenario, &msg);
            }
        }
    }
}

fn resolve(runtime: &SharedRuntime, cmd: Cmd) -> Option<AppMsg> {
    let msg = runtime.block_on(cmd)?;
    msg.downcast::<AppMsg>().ok().map(|boxed| *boxed)
}
