//! Previous/next controls and the current page number.

/// Component rendering the pagination controls.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaginationComponent;

impl PaginationComponent {
    /// Renders `< Previous  Page N  Next >`.
    ///
    /// The previous control is marked disabled when `previous_enabled` is
    /// false; the next control is always enabled.
    #[must_use]
    pub fn view(page: u32, previous_enabled: bool) -> String {
        let previous = if previous_enabled {
            "< Previous"
        } else {
            "< Previous (disabled)"
        };
        format!("{previous}  Page {page}  Next >\n")
    }
}
