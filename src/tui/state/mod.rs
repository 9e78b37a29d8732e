//! State management for the repository view.
//!
//! This module provides the closed filter enum and the pure state machine
//! that decides which requests the view issues and which responses it
//! keeps.

mod issue_filter;
mod repository_view;

pub use issue_filter::IssueFilter;
pub use repository_view::{
    Effect, Event, Outcome, PageDirection, ReadyState, RepositoryView, RequestId, ResponsePolicy,
    Transition, ViewState,
};
