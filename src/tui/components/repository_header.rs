//! Header block showing the repository the issues belong to.

use crate::github::models::RepositoryInfo;

use super::text_truncate::truncate_to_width;

/// Back-navigation hint rendered above the repository details.
pub const BACK_HINT: &str = "← Back to repositories";

/// Component rendering the back hint, owner avatar, name and description.
#[derive(Debug, Clone, Copy, Default)]
pub struct RepositoryHeaderComponent;

impl RepositoryHeaderComponent {
    /// Number of lines [`Self::view`] renders for `repository`.
    #[must_use]
    pub fn line_count(repository: &RepositoryInfo) -> usize {
        if repository.description.is_empty() {
            3
        } else {
            4
        }
    }

    /// Renders the header, one element per line.
    ///
    /// The description line is omitted when the repository has none.
    #[must_use]
    pub fn view(repository: &RepositoryInfo, max_width: usize) -> String {
        let owner = &repository.owner;
        let mut lines = vec![
            BACK_HINT.to_owned(),
            format!("[avatar {}] {}", owner.login, owner.avatar_url),
            repository.name.clone(),
        ];
        if !repository.description.is_empty() {
            lines.push(repository.description.clone());
        }

        let mut output = String::new();
        for line in lines {
            output.push_str(&truncate_to_width(&line, max_width));
            output.push('\n');
        }
        output
    }
}
