//! UI components for the repository view.
//!
//! Each component is a stateless renderer turning part of the view state
//! into terminal lines.

mod filter_bar;
mod issue_list;
mod pagination;
mod repository_header;
pub(crate) mod text_truncate;

pub use filter_bar::FilterBarComponent;
pub use issue_list::{IssueListComponent, IssueListViewContext, LINES_PER_ISSUE};
pub use pagination::PaginationComponent;
pub use repository_header::{BACK_HINT, RepositoryHeaderComponent};
