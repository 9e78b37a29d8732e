//! State machine behind the repository view.
//!
//! [`RepositoryView`] owns the view state and is driven exclusively through
//! [`RepositoryView::apply`], which takes an [`Event`] and returns the
//! [`Effect`]s (requests) the host must execute. The host feeds each
//! response back as another event. Keeping the transitions pure makes the
//! ordering rules testable without a terminal or network:
//!
//! - mounting issues one joined load of repository metadata and the first
//!   page of open issues;
//! - every filter or page mutation is committed before its refetch is built,
//!   so each request reflects the latest state;
//! - refetches are numbered, and the [`ResponsePolicy`] decides whether a
//!   response that resolves after a newer request was issued still lands;
//! - after [`Event::Unmounted`] every late response is discarded.

use crate::github::gateway::{DEFAULT_PER_PAGE, ListIssuesParams};
use crate::github::models::{Issue, RepositoryInfo};

use super::IssueFilter;

/// Sequence number of an issue refetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

impl RequestId {
    /// Returns the raw sequence number.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// How responses to overlapping refetches are reconciled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponsePolicy {
    /// Every response replaces the list; the last one to resolve wins even
    /// when it answers an older request.
    #[default]
    LastResolvedWins,
    /// Responses to anything but the newest issued refetch are dropped.
    LatestRequestWins,
}

/// Direction of a pagination control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageDirection {
    /// The "previous" control.
    Previous,
    /// The "next" control.
    Next,
}

/// Inputs to the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The view was mounted.
    Mounted,
    /// Both initial requests resolved.
    InitialLoadSucceeded {
        /// Repository metadata.
        repository: RepositoryInfo,
        /// First page of open issues.
        issues: Vec<Issue>,
    },
    /// At least one of the initial requests failed.
    InitialLoadFailed {
        /// Display message for the failure.
        message: String,
    },
    /// A filter control was activated.
    FilterChanged(IssueFilter),
    /// A pagination control was activated.
    PageChanged(PageDirection),
    /// A refetch resolved.
    IssuesFetchSucceeded {
        /// The request being answered.
        request: RequestId,
        /// The new page of issues.
        issues: Vec<Issue>,
    },
    /// A refetch failed.
    IssuesFetchFailed {
        /// The request being answered.
        request: RequestId,
        /// Display message for the failure.
        message: String,
    },
    /// The view was torn down.
    Unmounted,
}

/// Requests the host must issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Fetch repository metadata and the first issue page concurrently and
    /// report both together.
    LoadInitial {
        /// Parameters of the issue request.
        params: ListIssuesParams,
    },
    /// Fetch one page of issues.
    FetchIssues {
        /// Sequence number to echo back with the response.
        request: RequestId,
        /// Parameters of the issue request.
        params: ListIssuesParams,
    },
}

/// What an event did to the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The state changed.
    Applied,
    /// The event does not apply in the current state.
    Ignored,
    /// A response was dropped because a newer request had been issued.
    DiscardedStale {
        /// The request whose response was dropped.
        request: RequestId,
        /// The newest issued request.
        latest: RequestId,
    },
}

/// Result of applying one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// Requests to issue, in order.
    pub effects: Vec<Effect>,
    /// How the event affected the state.
    pub outcome: Outcome,
}

impl Transition {
    const fn ignored() -> Self {
        Self {
            effects: Vec::new(),
            outcome: Outcome::Ignored,
        }
    }

    const fn applied() -> Self {
        Self {
            effects: Vec::new(),
            outcome: Outcome::Applied,
        }
    }

    fn with_effect(effect: Effect) -> Self {
        Self {
            effects: vec![effect],
            outcome: Outcome::Applied,
        }
    }
}

/// Content of a loaded view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadyState {
    /// Repository metadata; never refetched after mount.
    pub repository: RepositoryInfo,
    /// Issues currently displayed.
    pub issues: Vec<Issue>,
    /// Current page (1-based).
    pub page: u32,
    /// Active filter.
    pub filter: IssueFilter,
    /// Message of the most recent failed refetch, cleared by the next
    /// successful one.
    pub error: Option<String>,
}

/// Tagged view state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    /// Waiting for the joined initial requests.
    Loading,
    /// Content is displayed.
    Ready(ReadyState),
    /// The initial load failed.
    Failed {
        /// Display message for the failure.
        message: String,
    },
    /// The view was torn down.
    Unmounted,
}

/// The repository view's state machine.
#[derive(Debug, Clone)]
pub struct RepositoryView {
    state: ViewState,
    policy: ResponsePolicy,
    per_page: u8,
    mounted: bool,
    next_request: u64,
    latest_request: Option<RequestId>,
}

impl Default for RepositoryView {
    fn default() -> Self {
        Self::new(ResponsePolicy::default(), DEFAULT_PER_PAGE)
    }
}

impl RepositoryView {
    /// Creates a view in the loading state.
    #[must_use]
    pub const fn new(policy: ResponsePolicy, per_page: u8) -> Self {
        Self {
            state: ViewState::Loading,
            policy,
            per_page,
            mounted: false,
            next_request: 1,
            latest_request: None,
        }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> &ViewState {
        &self.state
    }

    /// Response reconciliation policy.
    #[must_use]
    pub const fn policy(&self) -> ResponsePolicy {
        self.policy
    }

    /// True until the initial requests have resolved.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self.state, ViewState::Loading)
    }

    /// Loaded content, if any.
    #[must_use]
    pub const fn ready(&self) -> Option<&ReadyState> {
        match &self.state {
            ViewState::Ready(ready) => Some(ready),
            _ => None,
        }
    }

    /// Current page; 1 before the view is ready.
    #[must_use]
    pub fn page(&self) -> u32 {
        self.ready().map_or(1, |ready| ready.page)
    }

    /// Active filter; `All` before the view is ready.
    #[must_use]
    pub fn filter(&self) -> IssueFilter {
        self.ready().map_or(IssueFilter::All, |ready| ready.filter)
    }

    /// Issues currently displayed.
    #[must_use]
    pub fn issues(&self) -> &[Issue] {
        match self.ready() {
            Some(ready) => ready.issues.as_slice(),
            None => &[],
        }
    }

    /// Whether the "previous" control is enabled.
    ///
    /// Callers must not dispatch [`PageDirection::Previous`] while this is
    /// false.
    #[must_use]
    pub fn previous_enabled(&self) -> bool {
        self.ready().is_some_and(|ready| ready.page >= 2)
    }

    /// Newest issued refetch, if any.
    #[must_use]
    pub const fn latest_request(&self) -> Option<RequestId> {
        self.latest_request
    }

    /// Applies an event and returns the requests it triggers.
    pub fn apply(&mut self, event: Event) -> Transition {
        if matches!(self.state, ViewState::Unmounted) {
            return Transition::ignored();
        }

        match event {
            Event::Mounted => self.on_mounted(),
            Event::InitialLoadSucceeded { repository, issues } => {
                self.on_initial_load(repository, issues)
            }
            Event::InitialLoadFailed { message } => self.on_initial_failure(message),
            Event::FilterChanged(filter) => self.on_filter_changed(filter),
            Event::PageChanged(direction) => self.on_page_changed(direction),
            Event::IssuesFetchSucceeded { request, issues } => {
                self.on_issues_response(request, Ok(issues))
            }
            Event::IssuesFetchFailed { request, message } => {
                self.on_issues_response(request, Err(message))
            }
            Event::Unmounted => {
                self.state = ViewState::Unmounted;
                Transition::applied()
            }
        }
    }

    fn on_mounted(&mut self) -> Transition {
        if self.mounted {
            return Transition::ignored();
        }
        self.mounted = true;
        Transition::with_effect(Effect::LoadInitial {
            params: ListIssuesParams::initial(self.per_page),
        })
    }

    fn on_initial_load(&mut self, repository: RepositoryInfo, issues: Vec<Issue>) -> Transition {
        if !self.is_loading() {
            return Transition::ignored();
        }
        self.state = ViewState::Ready(ReadyState {
            repository,
            issues,
            page: 1,
            filter: IssueFilter::All,
            error: None,
        });
        Transition::applied()
    }

    fn on_initial_failure(&mut self, message: String) -> Transition {
        if !self.is_loading() {
            return Transition::ignored();
        }
        self.state = ViewState::Failed { message };
        Transition::applied()
    }

    fn on_filter_changed(&mut self, filter: IssueFilter) -> Transition {
        let ViewState::Ready(ready) = &mut self.state else {
            return Transition::ignored();
        };
        ready.filter = filter;
        self.refetch()
    }

    fn on_page_changed(&mut self, direction: PageDirection) -> Transition {
        let ViewState::Ready(ready) = &mut self.state else {
            return Transition::ignored();
        };
        match direction {
            PageDirection::Previous if ready.page < 2 => {
                tracing::debug!("previous page requested while disabled");
                return Transition::ignored();
            }
            PageDirection::Previous => ready.page -= 1,
            PageDirection::Next => ready.page = ready.page.saturating_add(1),
        }
        self.refetch()
    }

    /// Builds the refetch for the state as it stands after a mutation.
    fn refetch(&mut self) -> Transition {
        let Some(ready) = self.ready() else {
            return Transition::ignored();
        };
        let params =
            ListIssuesParams::for_page(ready.filter.issue_state(), self.per_page, ready.page);
        let request = RequestId(self.next_request);
        self.next_request += 1;
        self.latest_request = Some(request);
        Transition::with_effect(Effect::FetchIssues { request, params })
    }

    fn on_issues_response(
        &mut self,
        request: RequestId,
        response: Result<Vec<Issue>, String>,
    ) -> Transition {
        let policy = self.policy;
        let latest = self.latest_request;
        let ViewState::Ready(ready) = &mut self.state else {
            return Transition::ignored();
        };

        if policy == ResponsePolicy::LatestRequestWins
            && let Some(latest_request) = latest
            && request != latest_request
        {
            return Transition {
                effects: Vec::new(),
                outcome: Outcome::DiscardedStale {
                    request,
                    latest: latest_request,
                },
            };
        }

        match response {
            Ok(issues) => {
                ready.issues = issues;
                ready.error = None;
            }
            Err(message) => ready.error = Some(message),
        }
        Transition::applied()
    }
}

#[cfg(test)]
mod tests;
