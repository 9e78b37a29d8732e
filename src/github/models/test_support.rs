//! Fixture builders for repository and issue models.
//!
//! # Examples
//!
//! ```
//! use issuedeck::github::models::test_support::{issue, repository_info};
//!
//! let repository = repository_info("react", "facebook");
//! let first = issue(1, "Crash on startup", "alice");
//! assert_eq!(repository.owner.login, "facebook");
//! assert_eq!(first.user.login, "alice");
//! ```

use super::{Account, Issue, ItemId, Label, RepositoryInfo};

/// Builds an account with a predictable avatar URL.
#[must_use]
pub fn account(login: &str) -> Account {
    Account {
        login: login.to_owned(),
        avatar_url: format!("https://avatars.example.test/{login}.png"),
    }
}

/// Builds repository metadata owned by `owner`.
#[must_use]
pub fn repository_info(name: &str, owner: &str) -> RepositoryInfo {
    RepositoryInfo {
        name: name.to_owned(),
        description: format!("Description of {name}"),
        owner: account(owner),
    }
}

/// Builds an unlabelled issue.
#[must_use]
pub fn issue(id: u64, title: &str, author: &str) -> Issue {
    Issue {
        id: ItemId::Number(id),
        title: title.to_owned(),
        html_url: format!("https://github.com/octo/repo/issues/{id}"),
        user: account(author),
        labels: Vec::new(),
    }
}

/// Builds a label.
#[must_use]
pub fn label(id: u64, name: &str) -> Label {
    Label {
        id: ItemId::Number(id),
        name: name.to_owned(),
    }
}

/// Builds `count` issues with sequential IDs starting at `first_id`.
#[must_use]
pub fn issues_from(first_id: u64, count: u64) -> Vec<Issue> {
    (first_id..first_id + count)
        .map(|id| issue(id, &format!("Issue {id}"), "alice"))
        .collect()
}
