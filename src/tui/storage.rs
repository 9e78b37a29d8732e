//! Startup context storage for the repository view TUI.
//!
//! This module owns the global `OnceLock` values used during TUI bootstrapping
//! and provides the setter/getter functions consumed by CLI wiring and
//! `RepositoryApp::init()`.

use std::fmt;
use std::sync::{Arc, OnceLock};

use crossterm::terminal;

use crate::github::gateway::{DEFAULT_PER_PAGE, IssueGateway};
use crate::github::locator::RepositoryLocator;
use crate::telemetry::{NoopTelemetrySink, TelemetrySink};

use super::state::ResponsePolicy;

/// Global storage for the view context.
///
/// This is set before the TUI program starts and read by
/// `RepositoryApp::init()`.
static VIEW_CONTEXT: OnceLock<ViewContext> = OnceLock::new();

/// Global storage for initial terminal dimensions.
///
/// This is set before the TUI program starts and read by
/// `RepositoryApp::init()` so the first frame uses the actual terminal size.
static INITIAL_TERMINAL_SIZE: OnceLock<(u16, u16)> = OnceLock::new();

/// Everything the view needs to issue requests.
#[derive(Clone)]
pub struct ViewContext {
    pub(crate) gateway: Arc<dyn IssueGateway>,
    pub(crate) locator: RepositoryLocator,
    pub(crate) telemetry: Arc<dyn TelemetrySink>,
    pub(crate) policy: ResponsePolicy,
    pub(crate) per_page: u8,
}

impl ViewContext {
    /// Creates a context with default policy, page size and no telemetry.
    #[must_use]
    pub fn new(gateway: Arc<dyn IssueGateway>, locator: RepositoryLocator) -> Self {
        Self {
            gateway,
            locator,
            telemetry: Arc::new(NoopTelemetrySink),
            policy: ResponsePolicy::default(),
            per_page: DEFAULT_PER_PAGE,
        }
    }

    /// Replaces the telemetry sink.
    #[must_use]
    pub fn with_telemetry(mut self, telemetry: Arc<dyn TelemetrySink>) -> Self {
        self.telemetry = telemetry;
        self
    }

    /// Replaces the response reconciliation policy.
    #[must_use]
    pub const fn with_policy(mut self, policy: ResponsePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Replaces the page size.
    #[must_use]
    pub const fn with_per_page(mut self, per_page: u8) -> Self {
        self.per_page = per_page;
        self
    }

    /// The repository being viewed.
    #[must_use]
    pub const fn locator(&self) -> &RepositoryLocator {
        &self.locator
    }
}

impl fmt::Debug for ViewContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewContext")
            .field("locator", &self.locator)
            .field("policy", &self.policy)
            .field("per_page", &self.per_page)
            .finish_non_exhaustive()
    }
}

/// Sets the view context for the TUI application.
///
/// This must be called before starting the bubbletea-rs program. Without
/// it, the initial load fails with a configuration error.
///
/// # Returns
///
/// `true` if the context was set, `false` if it was already set.
pub fn set_view_context(context: ViewContext) -> bool {
    VIEW_CONTEXT.set(context).is_ok()
}

/// Sets the initial terminal dimensions for the TUI application.
///
/// # Returns
///
/// `true` if the dimensions were set, `false` if they were already set.
pub fn set_initial_terminal_size(width: u16, height: u16) -> bool {
    INITIAL_TERMINAL_SIZE.set((width, height)).is_ok()
}

/// Gets a clone of the stored view context, if configured.
pub(crate) fn get_view_context() -> Option<ViewContext> {
    VIEW_CONTEXT.get().cloned()
}

/// Gets the initial terminal dimensions from storage.
///
/// Falls back to querying the terminal, then to 80x24.
pub(crate) fn get_initial_terminal_size() -> (u16, u16) {
    const DEFAULT_WIDTH: u16 = 80;
    const DEFAULT_HEIGHT: u16 = 24;

    INITIAL_TERMINAL_SIZE
        .get()
        .copied()
        .filter(|(width, height)| *width > 0 && *height > 0)
        .or_else(|| {
            terminal::size()
                .ok()
                .filter(|(width, height)| *width > 0 && *height > 0)
        })
        .unwrap_or((DEFAULT_WIDTH, DEFAULT_HEIGHT))
}
