//! Message types for the TUI update loop.
//!
//! This module defines all message types that can be sent to the application's
//! update function. Messages represent user actions, async command results,
//! and system events.

use crate::github::error::IntakeError;
use crate::github::models::{Issue, RepositoryInfo};

use super::state::{IssueFilter, RequestId};

/// Messages for the repository view TUI application.
#[derive(Debug, Clone)]
pub enum AppMsg {
    // Lifecycle
    /// Emitted once by `init()` to start the initial load.
    Mount,
    /// Leave the view (back navigation).
    Back,
    /// Quit the application.
    Quit,
    /// Toggle help overlay.
    ToggleHelp,

    // Request controls
    /// Activate a filter control.
    SelectFilter(IssueFilter),
    /// Activate the "previous" pagination control.
    PreviousPage,
    /// Activate the "next" pagination control.
    NextPage,

    // Scrolling
    /// Scroll the issue list up one entry.
    ScrollUp,
    /// Scroll the issue list down one entry.
    ScrollDown,

    // Data loading
    /// Both initial requests resolved.
    InitialLoaded {
        /// Repository metadata.
        repository: RepositoryInfo,
        /// First page of open issues.
        issues: Vec<Issue>,
    },
    /// At least one initial request failed.
    InitialLoadFailed(String),
    /// An issue refetch resolved.
    IssuesLoaded {
        /// The request being answered.
        request: RequestId,
        /// The new page of issues.
        issues: Vec<Issue>,
    },
    /// An issue refetch failed.
    IssuesFailed {
        /// The request being answered.
        request: RequestId,
        /// Display message for the failure.
        message: String,
    },

    // Window events
    /// Terminal window was resized.
    WindowResized {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
}

impl AppMsg {
    /// Creates an initial-load failure message from an `IntakeError`.
    #[must_use]
    pub fn from_initial_error(error: &IntakeError) -> Self {
        Self::InitialLoadFailed(error.to_string())
    }

    /// Returns true for messages produced by the request controls.
    #[must_use]
    pub const fn is_request_control(&self) -> bool {
        matches!(
            self,
            Self::SelectFilter(_) | Self::PreviousPage | Self::NextPage
        )
    }

    /// Returns true for messages carrying request results.
    #[must_use]
    pub const fn is_data(&self) -> bool {
        matches!(
            self,
            Self::InitialLoaded { .. }
                | Self::InitialLoadFailed(_)
                | Self::IssuesLoaded { .. }
                | Self::IssuesFailed { .. }
        )
    }
}
