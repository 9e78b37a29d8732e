//! Filter controls for the issue list.

use crate::tui::state::IssueFilter;

/// Component rendering the three filter controls.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilterBarComponent;

impl FilterBarComponent {
    /// Renders the controls in `All`, `Open`, `Closed` order with the active
    /// one wrapped in brackets.
    #[must_use]
    pub fn view(active: IssueFilter) -> String {
        let controls: Vec<String> = IssueFilter::CONTROLS
            .iter()
            .map(|&filter| {
                if filter == active {
                    format!("[{}]", filter.label())
                } else {
                    format!(" {} ", filter.label())
                }
            })
            .collect();
        format!("Filter: {}\n", controls.join(" "))
    }
}
