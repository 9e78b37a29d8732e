//! Repository identifier decoding and API base resolution.
//!
//! The repository view is addressed by a single identifier of the form
//! `owner/name`. Routers hand that identifier over percent-encoded
//! (`facebook%2Freact`), so it is decoded exactly once here. A full
//! `https://<host>/owner/name` URL is accepted as well, in which case the API
//! base is derived from the host.

use percent_encoding::percent_decode_str;
use url::Url;

use super::error::IntakeError;

/// Public GitHub REST API host.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Repository owner wrapper to avoid stringly typed parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryOwner(String);

impl RepositoryOwner {
    pub(crate) fn new(value: &str) -> Option<Self> {
        non_empty_segment(value).map(Self)
    }

    /// Borrow the owner value.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Repository name wrapper to prevent parameter mix-ups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryName(String);

impl RepositoryName {
    pub(crate) fn new(value: &str) -> Option<Self> {
        non_empty_segment(value).map(Self)
    }

    /// Borrow the repository name.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

fn non_empty_segment(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

/// Decoded repository identifier plus the API base it is served from.
///
/// # Example
///
/// ```
/// use issuedeck::RepositoryLocator;
///
/// let locator = RepositoryLocator::parse("facebook%2Freact")
///     .expect("identifier should decode");
/// assert_eq!(locator.repo_name(), "facebook/react");
/// assert_eq!(locator.issues_path(), "/repos/facebook/react/issues");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryLocator {
    api_base: Url,
    owner: RepositoryOwner,
    repository: RepositoryName,
}

impl RepositoryLocator {
    /// Creates a locator for `github.com` from already-split parts.
    ///
    /// # Errors
    ///
    /// Returns `IntakeError::InvalidRepository` when either part is blank.
    pub fn from_owner_repo(owner: &str, repo: &str) -> Result<Self, IntakeError> {
        let invalid = || IntakeError::InvalidRepository {
            input: format!("{owner}/{repo}"),
        };
        Ok(Self {
            api_base: default_api_base()?,
            owner: RepositoryOwner::new(owner).ok_or_else(invalid)?,
            repository: RepositoryName::new(repo).ok_or_else(invalid)?,
        })
    }

    /// Decodes a repository identifier.
    ///
    /// Accepts `owner/name` (optionally percent-encoded) or a repository URL
    /// such as `https://github.com/owner/name`.
    ///
    /// # Errors
    ///
    /// Returns `IntakeError::InvalidRepository` when the decoded value does
    /// not consist of exactly two non-empty segments, or
    /// `IntakeError::InvalidUrl` when a URL form cannot be parsed.
    pub fn parse(input: &str) -> Result<Self, IntakeError> {
        let decoded = percent_decode_str(input.trim())
            .decode_utf8()
            .map_err(|_| IntakeError::InvalidRepository {
                input: input.to_owned(),
            })?;

        if decoded.starts_with("http://") || decoded.starts_with("https://") {
            return Self::parse_url(input, &decoded);
        }

        let (owner, repository) = split_owner_repo(&decoded).ok_or_else(|| {
            IntakeError::InvalidRepository {
                input: input.to_owned(),
            }
        })?;

        Ok(Self {
            api_base: default_api_base()?,
            owner,
            repository,
        })
    }

    fn parse_url(input: &str, decoded: &str) -> Result<Self, IntakeError> {
        let parsed =
            Url::parse(decoded).map_err(|error| IntakeError::InvalidUrl(error.to_string()))?;
        let (owner, repository) = split_owner_repo(parsed.path()).ok_or_else(|| {
            IntakeError::InvalidRepository {
                input: input.to_owned(),
            }
        })?;

        Ok(Self {
            api_base: derive_api_base(&parsed)?,
            owner,
            repository,
        })
    }

    /// Replaces the API base, e.g. with a configured mirror or test server.
    ///
    /// # Errors
    ///
    /// Returns `IntakeError::InvalidUrl` when `api_base` cannot be parsed.
    pub fn with_api_base(mut self, api_base: &str) -> Result<Self, IntakeError> {
        self.api_base =
            Url::parse(api_base).map_err(|error| IntakeError::InvalidUrl(error.to_string()))?;
        Ok(self)
    }

    /// API base URL requests are sent to.
    #[must_use]
    pub const fn api_base(&self) -> &Url {
        &self.api_base
    }

    /// Repository owner.
    #[must_use]
    pub const fn owner(&self) -> &RepositoryOwner {
        &self.owner
    }

    /// Repository name.
    #[must_use]
    pub const fn repository(&self) -> &RepositoryName {
        &self.repository
    }

    /// The decoded `owner/name` identifier.
    #[must_use]
    pub fn repo_name(&self) -> String {
        format!("{}/{}", self.owner.as_str(), self.repository.as_str())
    }

    /// API path for repository metadata.
    #[must_use]
    pub fn repository_path(&self) -> String {
        format!("/repos/{}", self.repo_name())
    }

    /// API path for the repository's issue listing.
    #[must_use]
    pub fn issues_path(&self) -> String {
        format!("/repos/{}/issues", self.repo_name())
    }
}

fn split_owner_repo(path: &str) -> Option<(RepositoryOwner, RepositoryName)> {
    let trimmed = path.trim().trim_matches('/');
    let without_suffix = trimmed.strip_suffix(".git").unwrap_or(trimmed);
    let mut segments = without_suffix.split('/');
    let owner = RepositoryOwner::new(segments.next()?)?;
    let repository = RepositoryName::new(segments.next()?)?;
    if segments.next().is_some() {
        return None;
    }
    Some((owner, repository))
}

fn default_api_base() -> Result<Url, IntakeError> {
    Url::parse(DEFAULT_API_BASE).map_err(|error| IntakeError::InvalidUrl(error.to_string()))
}

/// Derives the API base for a repository URL's host.
///
/// `github.com` maps to the public API host; anything else is treated as a
/// GitHub Enterprise server serving the API under `/api/v3`.
fn derive_api_base(parsed: &Url) -> Result<Url, IntakeError> {
    let host = parsed
        .host_str()
        .ok_or_else(|| IntakeError::InvalidUrl("URL must include a host".to_owned()))?;

    if host.eq_ignore_ascii_case("github.com") || host.eq_ignore_ascii_case("www.github.com") {
        return default_api_base();
    }

    let mut api_url = parsed.clone();
    api_url.set_path("api/v3");
    api_url.set_query(None);
    api_url.set_fragment(None);
    Ok(api_url)
}
