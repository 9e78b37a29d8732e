//! Issue list component for displaying one page of issues.
//!
//! Each issue takes two lines: the author avatar marker, title and label
//! tags, then the author login and the issue URL. Only issues that fit
//! entirely within the visible height are rendered.

use crate::github::models::Issue;

use super::text_truncate::truncate_to_width;

/// Lines rendered per issue.
pub const LINES_PER_ISSUE: usize = 2;

/// Marker standing in for the author's avatar image.
const AVATAR_MARKER: &str = "◉";

/// Context for rendering the issue list view.
#[derive(Debug, Clone)]
pub struct IssueListViewContext<'a> {
    /// Issues on the current page, in API order.
    pub issues: &'a [Issue],
    /// Index of the first issue to render.
    pub scroll_offset: usize,
    /// Maximum number of lines available.
    pub visible_height: usize,
    /// Maximum line width in columns.
    pub max_width: usize,
}

/// Component for displaying the issue list.
#[derive(Debug, Clone, Copy, Default)]
pub struct IssueListComponent;

impl IssueListComponent {
    /// Renders the visible window of the list.
    #[must_use]
    pub fn view(ctx: &IssueListViewContext<'_>) -> String {
        if ctx.issues.is_empty() {
            return "  No issues on this page.\n".to_owned();
        }

        let mut output = String::new();
        let mut used_lines = 0;
        for issue in ctx.issues.iter().skip(ctx.scroll_offset) {
            if used_lines + LINES_PER_ISSUE > ctx.visible_height {
                break;
            }
            output.push_str(&truncate_to_width(&Self::title_line(issue), ctx.max_width));
            output.push('\n');
            output.push_str(&truncate_to_width(&Self::author_line(issue), ctx.max_width));
            output.push('\n');
            used_lines += LINES_PER_ISSUE;
        }
        output
    }

    /// Number of issues that fit in `visible_height` lines.
    #[must_use]
    pub const fn capacity(visible_height: usize) -> usize {
        match visible_height.checked_div(LINES_PER_ISSUE) {
            Some(count) => count,
            None => 0,
        }
    }

    fn title_line(issue: &Issue) -> String {
        let mut line = format!("{AVATAR_MARKER} {}", issue.title);
        for label in &issue.labels {
            line.push_str(" [");
            line.push_str(&label.name);
            line.push(']');
        }
        line
    }

    fn author_line(issue: &Issue) -> String {
        format!("  {} · {}", issue.user.login, issue.html_url)
    }
}
