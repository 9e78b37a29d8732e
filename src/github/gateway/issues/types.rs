//! Public types for issue listing requests.

/// Default number of issues requested per page.
pub const DEFAULT_PER_PAGE: u8 = 30;

/// Issue state filter understood by the listing endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IssueState {
    /// Only open issues.
    #[default]
    Open,
    /// Only closed issues.
    Closed,
    /// Issues in any state.
    All,
}

impl IssueState {
    /// Returns the API parameter value for this state.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
            Self::All => "all",
        }
    }
}

/// Query parameters for `GET /repos/{owner}/{name}/issues`.
///
/// `page` is optional because the first load leaves it to the server's
/// default, whereas every refetch names the page explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListIssuesParams {
    /// Issue state to list.
    pub state: IssueState,
    /// Items per page (1..=100).
    pub per_page: u8,
    /// Page number (1-based); omitted from the query when `None`.
    pub page: Option<u32>,
}

impl ListIssuesParams {
    /// Parameters of the first load: open issues, no explicit page.
    #[must_use]
    pub const fn initial(per_page: u8) -> Self {
        Self {
            state: IssueState::Open,
            per_page,
            page: None,
        }
    }

    /// Parameters of a refetch for an explicit state and page.
    #[must_use]
    pub const fn for_page(state: IssueState, per_page: u8, page: u32) -> Self {
        Self {
            state,
            per_page,
            page: Some(page),
        }
    }

    /// Query pairs in the order they are sent.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("state", self.state.as_str().to_owned()),
            ("per_page", self.per_page.to_string()),
        ];
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        pairs
    }
}

impl Default for ListIssuesParams {
    fn default() -> Self {
        Self::initial(DEFAULT_PER_PAGE)
    }
}
