//! Data models for repository metadata and issues.
//!
//! Types prefixed with `Api` are internal deserialisation targets that mirror
//! the GitHub REST payloads with every field optional. They convert into the
//! public domain types, which default missing text to empty strings so the
//! view never has to guard individual fields.

use std::fmt;

use serde::Deserialize;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// Identity key of an issue or label.
///
/// GitHub sends numeric identifiers, but mirrors and fixtures sometimes use
/// strings, so both are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    /// Numeric identifier.
    Number(u64),
    /// Textual identifier.
    Text(String),
}

impl Default for ItemId {
    fn default() -> Self {
        Self::Number(0)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

impl From<u64> for ItemId {
    fn from(value: u64) -> Self {
        Self::Number(value)
    }
}

/// A GitHub account as shown next to repositories and issues.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Account {
    /// Login name.
    pub login: String,
    /// Avatar image URL.
    pub avatar_url: String,
}

/// Repository metadata shown in the view header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepositoryInfo {
    /// Repository name (without owner).
    pub name: String,
    /// Free-form description; empty when the repository has none.
    pub description: String,
    /// Owning account.
    pub owner: Account,
}

/// Issue label rendered as a tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Label {
    /// Stable identity key within the issue.
    pub id: ItemId,
    /// Label text.
    pub name: String,
}

/// A single entry of the issue list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Issue {
    /// Stable identity key within the list.
    pub id: ItemId,
    /// Issue title.
    pub title: String,
    /// Browser URL of the issue.
    pub html_url: String,
    /// Author account.
    pub user: Account,
    /// Labels in API order.
    pub labels: Vec<Label>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiAccount {
    pub(super) login: Option<String>,
    pub(super) avatar_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiRepository {
    pub(super) name: Option<String>,
    pub(super) description: Option<String>,
    pub(super) owner: Option<ApiAccount>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiLabel {
    pub(super) id: Option<ItemId>,
    pub(super) name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiIssue {
    pub(super) id: Option<ItemId>,
    pub(super) title: Option<String>,
    pub(super) html_url: Option<String>,
    pub(super) user: Option<ApiAccount>,
    pub(super) labels: Option<Vec<ApiLabel>>,
}

impl From<ApiAccount> for Account {
    fn from(value: ApiAccount) -> Self {
        Self {
            login: value.login.unwrap_or_default(),
            avatar_url: value.avatar_url.unwrap_or_default(),
        }
    }
}

impl From<ApiRepository> for RepositoryInfo {
    fn from(value: ApiRepository) -> Self {
        Self {
            name: value.name.unwrap_or_default(),
            description: value.description.unwrap_or_default(),
            owner: value.owner.map(Account::from).unwrap_or_default(),
        }
    }
}

impl From<ApiLabel> for Label {
    fn from(value: ApiLabel) -> Self {
        Self {
            id: value.id.unwrap_or_default(),
            name: value.name.unwrap_or_default(),
        }
    }
}

impl From<ApiIssue> for Issue {
    fn from(value: ApiIssue) -> Self {
        Self {
            id: value.id.unwrap_or_default(),
            title: value.title.unwrap_or_default(),
            html_url: value.html_url.unwrap_or_default(),
            user: value.user.map(Account::from).unwrap_or_default(),
            labels: value
                .labels
                .unwrap_or_default()
                .into_iter()
                .map(Label::from)
                .collect(),
        }
    }
}
