//! Transition tests for the repository view state machine.

use rstest::{fixture, rstest};

use super::*;
use crate::github::gateway::IssueState;
use crate::github::models::test_support::{issues_from, repository_info};

fn only_effect(transition: Transition) -> Effect {
    assert_eq!(transition.effects.len(), 1, "expected exactly one effect");
    transition
        .effects
        .into_iter()
        .next()
        .expect("effect should be present")
}

fn fetch_params(transition: Transition) -> (RequestId, ListIssuesParams) {
    match only_effect(transition) {
        Effect::FetchIssues { request, params } => (request, params),
        other => panic!("expected FetchIssues, got {other:?}"),
    }
}

fn loaded_view(policy: ResponsePolicy) -> RepositoryView {
    let mut view = RepositoryView::new(policy, 30);
    view.apply(Event::Mounted);
    view.apply(Event::InitialLoadSucceeded {
        repository: repository_info("react", "facebook"),
        issues: issues_from(1, 3),
    });
    view
}

#[fixture]
fn ready_view() -> RepositoryView {
    loaded_view(ResponsePolicy::LastResolvedWins)
}

#[test]
fn new_view_starts_loading_on_page_one_with_all_filter() {
    let view = RepositoryView::default();

    assert!(view.is_loading());
    assert_eq!(view.page(), 1);
    assert_eq!(view.filter(), IssueFilter::All);
    assert!(view.issues().is_empty());
    assert!(!view.previous_enabled());
}

#[test]
fn mount_requests_joined_initial_load_of_open_issues() {
    let mut view = RepositoryView::default();

    let effect = only_effect(view.apply(Event::Mounted));

    assert_eq!(
        effect,
        Effect::LoadInitial {
            params: ListIssuesParams {
                state: IssueState::Open,
                per_page: 30,
                page: None,
            }
        }
    );
}

#[test]
fn mount_runs_only_once() {
    let mut view = RepositoryView::default();
    view.apply(Event::Mounted);

    let second = view.apply(Event::Mounted);

    assert!(second.effects.is_empty());
    assert_eq!(second.outcome, Outcome::Ignored);
}

#[test]
fn initial_load_stores_both_responses_and_stops_loading() {
    let mut view = RepositoryView::default();
    view.apply(Event::Mounted);
    let repository = repository_info("react", "facebook");
    let issues = issues_from(1, 2);

    let transition = view.apply(Event::InitialLoadSucceeded {
        repository: repository.clone(),
        issues: issues.clone(),
    });

    assert!(transition.effects.is_empty());
    assert!(!view.is_loading());
    let ready = view.ready().expect("view should be ready");
    assert_eq!(ready.repository, repository);
    assert_eq!(ready.issues, issues);
    assert_eq!(ready.page, 1);
    assert_eq!(ready.filter, IssueFilter::All);
}

#[test]
fn initial_failure_leaves_loading_for_failed_state() {
    let mut view = RepositoryView::default();
    view.apply(Event::Mounted);

    view.apply(Event::InitialLoadFailed {
        message: "network down".to_owned(),
    });

    assert_eq!(
        view.state(),
        &ViewState::Failed {
            message: "network down".to_owned()
        }
    );
}

#[rstest]
fn loading_never_returns_after_ready(mut ready_view: RepositoryView) {
    let (request, _) = fetch_params(ready_view.apply(Event::PageChanged(PageDirection::Next)));
    ready_view.apply(Event::IssuesFetchSucceeded {
        request,
        issues: Vec::new(),
    });
    ready_view.apply(Event::InitialLoadSucceeded {
        repository: repository_info("other", "someone"),
        issues: Vec::new(),
    });

    assert!(!ready_view.is_loading());
    let ready = ready_view.ready().expect("view should be ready");
    assert_eq!(ready.repository.name, "react", "metadata is never refetched");
}

#[rstest]
fn closed_filter_refetches_current_page(mut ready_view: RepositoryView) {
    let (_, params) = fetch_params(ready_view.apply(Event::FilterChanged(IssueFilter::Closed)));

    assert_eq!(params, ListIssuesParams::for_page(IssueState::Closed, 30, 1));
    assert_eq!(ready_view.filter(), IssueFilter::Closed);
}

#[rstest]
fn filter_change_does_not_reset_page(mut ready_view: RepositoryView) {
    ready_view.apply(Event::PageChanged(PageDirection::Next));
    ready_view.apply(Event::PageChanged(PageDirection::Next));

    let (_, params) = fetch_params(ready_view.apply(Event::FilterChanged(IssueFilter::Open)));

    assert_eq!(ready_view.page(), 3);
    assert_eq!(params.page, Some(3));
    assert_eq!(params.state, IssueState::Open);
}

#[rstest]
fn next_from_page_three_with_open_filter_requests_page_four(mut ready_view: RepositoryView) {
    ready_view.apply(Event::FilterChanged(IssueFilter::Open));
    ready_view.apply(Event::PageChanged(PageDirection::Next));
    ready_view.apply(Event::PageChanged(PageDirection::Next));
    assert_eq!(ready_view.page(), 3);

    let (_, params) = fetch_params(ready_view.apply(Event::PageChanged(PageDirection::Next)));

    assert_eq!(ready_view.page(), 4);
    assert_eq!(params, ListIssuesParams::for_page(IssueState::Open, 30, 4));
}

#[rstest]
fn next_page_is_unbounded(mut ready_view: RepositoryView) {
    for expected in 2..=50 {
        let (_, params) = fetch_params(ready_view.apply(Event::PageChanged(PageDirection::Next)));
        assert_eq!(params.page, Some(expected));
    }
    assert_eq!(ready_view.page(), 50);
}

#[rstest]
fn previous_decrements_by_exactly_one(mut ready_view: RepositoryView) {
    ready_view.apply(Event::PageChanged(PageDirection::Next));
    ready_view.apply(Event::PageChanged(PageDirection::Next));
    assert!(ready_view.previous_enabled());

    let (_, params) = fetch_params(ready_view.apply(Event::PageChanged(PageDirection::Previous)));

    assert_eq!(ready_view.page(), 2);
    assert_eq!(params.page, Some(2));
}

#[rstest]
fn previous_is_disabled_and_inert_on_first_page(mut ready_view: RepositoryView) {
    assert!(!ready_view.previous_enabled());

    let transition = ready_view.apply(Event::PageChanged(PageDirection::Previous));

    assert!(transition.effects.is_empty());
    assert_eq!(transition.outcome, Outcome::Ignored);
    assert_eq!(ready_view.page(), 1);
}

#[test]
fn controls_are_ignored_while_loading() {
    let mut view = RepositoryView::default();
    view.apply(Event::Mounted);

    let filter = view.apply(Event::FilterChanged(IssueFilter::Closed));
    let page = view.apply(Event::PageChanged(PageDirection::Next));

    assert!(filter.effects.is_empty());
    assert!(page.effects.is_empty());
    assert!(view.is_loading());
}

#[rstest]
#[case::filter_then_next(
    vec![Event::FilterChanged(IssueFilter::Closed), Event::PageChanged(PageDirection::Next)],
    IssueState::Closed,
    2
)]
#[case::next_next_previous_open(
    vec![
        Event::PageChanged(PageDirection::Next),
        Event::PageChanged(PageDirection::Next),
        Event::PageChanged(PageDirection::Previous),
        Event::FilterChanged(IssueFilter::Open),
    ],
    IssueState::Open,
    2
)]
#[case::filter_flip_flop(
    vec![
        Event::FilterChanged(IssueFilter::Open),
        Event::FilterChanged(IssueFilter::All),
    ],
    IssueState::All,
    1
)]
fn each_mutation_fires_one_refetch_with_committed_state(
    mut ready_view: RepositoryView,
    #[case] events: Vec<Event>,
    #[case] expected_state: IssueState,
    #[case] expected_page: u32,
) {
    let mut last = None;
    for event in events {
        let (request, params) = fetch_params(ready_view.apply(event));
        assert_eq!(params.state, ready_view.filter().issue_state());
        assert_eq!(params.page, Some(ready_view.page()));
        last = Some((request, params));
    }

    let (request, params) = last.expect("at least one refetch");
    assert_eq!(params.state, expected_state);
    assert_eq!(params.page, Some(expected_page));
    assert_eq!(ready_view.latest_request(), Some(request));
}

#[rstest]
fn request_ids_increase_monotonically(mut ready_view: RepositoryView) {
    let (first, _) = fetch_params(ready_view.apply(Event::PageChanged(PageDirection::Next)));
    let (second, _) = fetch_params(ready_view.apply(Event::FilterChanged(IssueFilter::Open)));

    assert!(second > first);
    assert_eq!(second.get(), first.get() + 1);
}

#[test]
fn last_resolved_response_wins_by_default() {
    let mut view = loaded_view(ResponsePolicy::LastResolvedWins);
    let (request_a, _) = fetch_params(view.apply(Event::FilterChanged(IssueFilter::Open)));
    let (request_b, _) = fetch_params(view.apply(Event::FilterChanged(IssueFilter::Closed)));
    let issues_a = issues_from(100, 2);
    let issues_b = issues_from(200, 2);

    view.apply(Event::IssuesFetchSucceeded {
        request: request_b,
        issues: issues_b,
    });
    let transition = view.apply(Event::IssuesFetchSucceeded {
        request: request_a,
        issues: issues_a.clone(),
    });

    assert_eq!(transition.outcome, Outcome::Applied);
    assert_eq!(view.issues(), issues_a.as_slice());
}

#[test]
fn latest_request_policy_discards_stale_responses() {
    let mut view = loaded_view(ResponsePolicy::LatestRequestWins);
    let (request_a, _) = fetch_params(view.apply(Event::FilterChanged(IssueFilter::Open)));
    let (request_b, _) = fetch_params(view.apply(Event::FilterChanged(IssueFilter::Closed)));
    let issues_b = issues_from(200, 2);

    view.apply(Event::IssuesFetchSucceeded {
        request: request_b,
        issues: issues_b.clone(),
    });
    let transition = view.apply(Event::IssuesFetchSucceeded {
        request: request_a,
        issues: issues_from(100, 2),
    });

    assert_eq!(
        transition.outcome,
        Outcome::DiscardedStale {
            request: request_a,
            latest: request_b,
        }
    );
    assert_eq!(view.issues(), issues_b.as_slice());
}

#[rstest]
fn failed_refetch_keeps_issues_and_records_error(mut ready_view: RepositoryView) {
    let before = ready_view.issues().to_vec();
    let (request, _) = fetch_params(ready_view.apply(Event::PageChanged(PageDirection::Next)));

    ready_view.apply(Event::IssuesFetchFailed {
        request,
        message: "timeout".to_owned(),
    });

    let ready = ready_view.ready().expect("view should be ready");
    assert_eq!(ready.issues, before);
    assert_eq!(ready.error.as_deref(), Some("timeout"));
    assert_eq!(ready.page, 2, "page mutation is kept after a failed refetch");
}

#[rstest]
fn successful_refetch_clears_previous_error(mut ready_view: RepositoryView) {
    let (first, _) = fetch_params(ready_view.apply(Event::PageChanged(PageDirection::Next)));
    ready_view.apply(Event::IssuesFetchFailed {
        request: first,
        message: "timeout".to_owned(),
    });
    let (second, _) = fetch_params(ready_view.apply(Event::PageChanged(PageDirection::Next)));

    ready_view.apply(Event::IssuesFetchSucceeded {
        request: second,
        issues: Vec::new(),
    });

    let ready = ready_view.ready().expect("view should be ready");
    assert!(ready.error.is_none());
    assert!(ready.issues.is_empty(), "out-of-range page shows no issues");
}

#[rstest]
fn responses_after_unmount_are_discarded(mut ready_view: RepositoryView) {
    let (request, _) = fetch_params(ready_view.apply(Event::PageChanged(PageDirection::Next)));
    ready_view.apply(Event::Unmounted);

    let transition = ready_view.apply(Event::IssuesFetchSucceeded {
        request,
        issues: issues_from(1, 1),
    });

    assert_eq!(transition.outcome, Outcome::Ignored);
    assert_eq!(ready_view.state(), &ViewState::Unmounted);
}

#[test]
fn initial_load_after_unmount_is_discarded() {
    let mut view = RepositoryView::default();
    view.apply(Event::Mounted);
    view.apply(Event::Unmounted);

    view.apply(Event::InitialLoadSucceeded {
        repository: repository_info("react", "facebook"),
        issues: issues_from(1, 1),
    });

    assert_eq!(view.state(), &ViewState::Unmounted);
    assert!(view.issues().is_empty());
}
