//! Main TUI application model implementing the MVU pattern.
//!
//! `RepositoryApp` wraps the [`RepositoryView`] state machine: messages are
//! translated into state machine events, and the effects those events
//! produce become bubbletea commands whose results come back as messages.
//!
//! # Module Structure
//!
//! - `effects`: Turning effects into request commands
//! - `model_impl`: `bubbletea_rs::Model` implementation
//! - `rendering`: View rendering methods for terminal output

use bubbletea_rs::Cmd;

use crate::github::models::Issue;

use super::components::IssueListComponent;
use super::messages::AppMsg;
use super::state::{
    Event, IssueFilter, Outcome, PageDirection, RepositoryView, ResponsePolicy, Transition,
    ViewState,
};
use super::storage::ViewContext;

mod effects;
mod model_impl;
mod rendering;

/// Main application model for the repository view TUI.
#[derive(Debug)]
pub struct RepositoryApp {
    /// Request and content state.
    view: RepositoryView,
    /// Gateway and settings used to execute effects.
    context: Option<ViewContext>,
    /// Index of the first visible issue.
    scroll_offset: usize,
    /// Terminal dimensions.
    width: u16,
    height: u16,
    /// Whether help overlay is visible.
    show_help: bool,
}

impl RepositoryApp {
    /// Creates an application without a view context.
    ///
    /// Effects fail with a configuration error until a context is supplied;
    /// this is the fallback used when the program starts unconfigured.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view: RepositoryView::default(),
            context: None,
            scroll_offset: 0,
            width: 80,
            height: 24,
            show_help: false,
        }
    }

    /// Creates an application that issues requests through `context`.
    #[must_use]
    pub fn with_context(context: ViewContext) -> Self {
        Self {
            view: RepositoryView::new(context.policy, context.per_page),
            context: Some(context),
            ..Self::new()
        }
    }

    /// Sets the terminal dimensions used for layout.
    #[must_use]
    pub const fn with_dimensions(mut self, width: u16, height: u16) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// The underlying state machine.
    #[must_use]
    pub const fn view_state(&self) -> &ViewState {
        self.view.state()
    }

    /// True until the initial requests have resolved.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.view.is_loading()
    }

    /// Current page.
    #[must_use]
    pub fn page(&self) -> u32 {
        self.view.page()
    }

    /// Active filter.
    #[must_use]
    pub fn filter(&self) -> IssueFilter {
        self.view.filter()
    }

    /// Issues currently displayed.
    #[must_use]
    pub fn issues(&self) -> &[Issue] {
        self.view.issues()
    }

    /// Response reconciliation policy in effect.
    #[must_use]
    pub const fn policy(&self) -> ResponsePolicy {
        self.view.policy()
    }

    /// Index of the first visible issue.
    #[must_use]
    pub const fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Whether the help overlay is visible.
    #[must_use]
    pub const fn is_help_visible(&self) -> bool {
        self.show_help
    }

    /// Handles a message and updates state accordingly.
    ///
    /// Request controls and request results go through the state machine;
    /// everything else is presentation state owned by the app.
    pub fn handle_message(&mut self, msg: &AppMsg) -> Option<Cmd> {
        if msg.is_request_control() {
            return self.handle_request_control(msg);
        }
        if msg.is_data() {
            return self.handle_data_msg(msg);
        }
        self.handle_lifecycle_msg(msg)
    }

    /// Dispatches filter and pagination controls.
    fn handle_request_control(&mut self, msg: &AppMsg) -> Option<Cmd> {
        let event = match msg {
            AppMsg::SelectFilter(filter) => Event::FilterChanged(*filter),
            AppMsg::PreviousPage => {
                if !self.view.previous_enabled() {
                    return None;
                }
                Event::PageChanged(PageDirection::Previous)
            }
            AppMsg::NextPage => Event::PageChanged(PageDirection::Next),
            _ => {
                debug_assert!(false, "non-control message routed to handle_request_control");
                return None;
            }
        };
        let transition = self.view.apply(event);
        self.run_transition(transition)
    }

    /// Dispatches request results to the state machine.
    fn handle_data_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        let replaces_list = matches!(
            msg,
            AppMsg::InitialLoaded { .. } | AppMsg::IssuesLoaded { .. }
        );
        let event = match msg {
            AppMsg::InitialLoaded { repository, issues } => Event::InitialLoadSucceeded {
                repository: repository.clone(),
                issues: issues.clone(),
            },
            AppMsg::InitialLoadFailed(message) => Event::InitialLoadFailed {
                message: message.clone(),
            },
            AppMsg::IssuesLoaded { request, issues } => Event::IssuesFetchSucceeded {
                request: *request,
                issues: issues.clone(),
            },
            AppMsg::IssuesFailed { request, message } => Event::IssuesFetchFailed {
                request: *request,
                message: message.clone(),
            },
            _ => {
                debug_assert!(false, "non-data message routed to handle_data_msg");
                return None;
            }
        };
        let transition = self.view.apply(event);
        if replaces_list && transition.outcome == Outcome::Applied {
            self.scroll_offset = 0;
        }
        self.run_transition(transition)
    }

    /// Dispatches lifecycle, scrolling and window messages.
    fn handle_lifecycle_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::Mount => {
                let transition = self.view.apply(Event::Mounted);
                self.run_transition(transition)
            }
            AppMsg::Back | AppMsg::Quit => {
                self.view.apply(Event::Unmounted);
                Some(bubbletea_rs::quit())
            }
            AppMsg::ToggleHelp => {
                self.show_help = !self.show_help;
                None
            }
            AppMsg::ScrollUp => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                None
            }
            AppMsg::ScrollDown => {
                self.scroll_offset = self.scroll_offset.saturating_add(1);
                self.clamp_scroll();
                None
            }
            AppMsg::WindowResized { width, height } => {
                self.width = *width;
                self.height = *height;
                self.clamp_scroll();
                None
            }
            _ => {
                debug_assert!(false, "unexpected message routed to handle_lifecycle_msg");
                None
            }
        }
    }

    /// Records discarded responses and converts effects into a command.
    fn run_transition(&self, transition: Transition) -> Option<Cmd> {
        if let Outcome::DiscardedStale { request, latest } = transition.outcome {
            self.record_stale_discard(request, latest);
        }
        self.commands_for(transition.effects)
    }

    /// Keeps the scroll offset within the scrollable range of the list.
    fn clamp_scroll(&mut self) {
        let visible = IssueListComponent::capacity(self.list_height()).max(1);
        let max_offset = self.view.issues().len().saturating_sub(visible);
        self.scroll_offset = self.scroll_offset.min(max_offset);
    }
}

impl Default for RepositoryApp {
    fn default() -> Self {
        Self::new()
    }
}
