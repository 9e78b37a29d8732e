//! Issue state filter selected through the filter controls.
//!
//! The controls can only produce one of these three values, so the state
//! machine never has to validate a free-form filter string.

use crate::github::gateway::IssueState;

/// Filter applied to the issue list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IssueFilter {
    /// Issues in any state.
    #[default]
    All,
    /// Only open issues.
    Open,
    /// Only closed issues.
    Closed,
}

impl IssueFilter {
    /// Filters in the order their controls are rendered.
    pub const CONTROLS: [Self; 3] = [Self::All, Self::Open, Self::Closed];

    /// Control label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Open => "Open",
            Self::Closed => "Closed",
        }
    }

    /// Key that selects this filter.
    #[must_use]
    pub const fn key(self) -> char {
        match self {
            Self::All => 'a',
            Self::Open => 'o',
            Self::Closed => 'c',
        }
    }

    /// The `state` query value this filter requests.
    #[must_use]
    pub const fn issue_state(self) -> IssueState {
        match self {
            Self::All => IssueState::All,
            Self::Open => IssueState::Open,
            Self::Closed => IssueState::Closed,
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::IssueFilter;
    use crate::github::gateway::IssueState;

    #[test]
    fn default_filter_is_all() {
        assert_eq!(IssueFilter::default(), IssueFilter::All);
    }

    #[rstest]
    #[case(IssueFilter::All, "all", "All")]
    #[case(IssueFilter::Open, "open", "Open")]
    #[case(IssueFilter::Closed, "closed", "Closed")]
    fn filter_maps_to_query_value_and_label(
        #[case] filter: IssueFilter,
        #[case] query: &str,
        #[case] label: &str,
    ) {
        assert_eq!(filter.issue_state().as_str(), query);
        assert_eq!(filter.label(), label);
    }

    #[test]
    fn controls_are_ordered_all_open_closed() {
        let states: Vec<IssueState> = IssueFilter::CONTROLS
            .iter()
            .map(|filter| filter.issue_state())
            .collect();
        assert_eq!(
            states,
            vec![IssueState::All, IssueState::Open, IssueState::Closed]
        );
    }
}
