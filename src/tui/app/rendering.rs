//! Rendering logic for the repository view TUI.
//!
//! This module contains the view rendering methods that produce string output
//! for display in the terminal. These are pure query methods that read state
//! without modification.

use super::RepositoryApp;
use crate::tui::components::{
    BACK_HINT, FilterBarComponent, IssueListComponent, IssueListViewContext, PaginationComponent,
    RepositoryHeaderComponent,
};
use crate::tui::state::{ReadyState, ViewState};

/// Placeholder shown until the initial requests resolve.
const LOADING_PLACEHOLDER: &str = "Loading...";

/// Lines around the issue list: blank, filter bar, blank, blank before the
/// pagination controls, pagination, status bar.
const FIXED_CHROME_LINES: usize = 6;

impl RepositoryApp {
    /// Renders the current frame without padding it to the terminal size.
    #[must_use]
    pub fn render(&self) -> String {
        if self.show_help {
            return Self::render_help_overlay();
        }

        match self.view.state() {
            ViewState::Loading => format!("{LOADING_PLACEHOLDER}\n"),
            ViewState::Ready(ready) => self.render_ready(ready),
            ViewState::Failed { message } => Self::render_failed(message),
            ViewState::Unmounted => String::new(),
        }
    }

    /// Lines available to the issue list.
    pub(super) fn list_height(&self) -> usize {
        let header_lines = self.view.ready().map_or(0, |ready| {
            RepositoryHeaderComponent::line_count(&ready.repository)
        });
        usize::from(self.height).saturating_sub(header_lines + FIXED_CHROME_LINES)
    }

    fn max_width(&self) -> usize {
        usize::from(self.width).saturating_sub(1).max(1)
    }

    fn render_ready(&self, ready: &ReadyState) -> String {
        let max_width = self.max_width();
        let mut output = RepositoryHeaderComponent::view(&ready.repository, max_width);

        output.push('\n');
        output.push_str(&FilterBarComponent::view(ready.filter));
        output.push('\n');

        let list_ctx = IssueListViewContext {
            issues: &ready.issues,
            scroll_offset: self.scroll_offset,
            visible_height: self.list_height(),
            max_width,
        };
        output.push_str(&IssueListComponent::view(&list_ctx));
        output.push('\n');

        output.push_str(&PaginationComponent::view(
            ready.page,
            self.view.previous_enabled(),
        ));
        output.push_str(&Self::render_status_bar(ready));
        output
    }

    fn render_failed(message: &str) -> String {
        format!("{BACK_HINT}\n\nFailed to load repository: {message}\nEsc:back  q:quit\n")
    }

    /// Renders the status bar: the last refetch error, or key hints.
    fn render_status_bar(ready: &ReadyState) -> String {
        if let Some(error) = &ready.error {
            return format!("Error: {error}\n");
        }
        "a/o/c:filter  ←/→:page  j/k:scroll  Esc:back  ?:help  q:quit\n".to_owned()
    }

    /// Renders the help overlay.
    fn render_help_overlay() -> String {
        let help_text = r"
=== Keyboard Shortcuts ===

Filtering:
  a          Show all issues
  o          Show open issues
  c          Show closed issues

Pagination:
  Left, h, p   Previous page
  Right, l, n  Next page

Navigation:
  j, Down    Scroll down
  k, Up      Scroll up

Other:
  Esc, b     Back to repositories
  ?          Toggle this help
  q          Quit

Press any key to close this help.
";
        help_text.to_owned()
    }
}
