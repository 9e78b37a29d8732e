//! Support modules for the repository view BDD tests.

pub(crate) mod harness;
#[path = "../support/runtime.rs"]
pub(crate) mod runtime;
pub(crate) mod state;

pub(crate) use harness::{issue_payloads, json_response, repository_payload};
pub(crate) use state::{ViewScenario, apply_pending_reversed, dispatch, dispatch_and_settle};
