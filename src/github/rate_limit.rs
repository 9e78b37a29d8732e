//! Request quota information reported by the GitHub API.
//!
//! Unauthenticated clients get a small hourly quota, so the view surfaces the
//! reset time when GitHub refuses a request for quota reasons.

use std::time::{SystemTime, UNIX_EPOCH};

/// Quota state as reported by `GET /rate_limit`.
///
/// # Example
///
/// ```
/// use issuedeck::github::rate_limit::RateLimitInfo;
///
/// let info = RateLimitInfo::new(60, 0, 1_700_000_000);
/// assert!(info.is_exhausted());
/// assert_eq!(info.limit(), 60);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitInfo {
    limit: u32,
    remaining: u32,
    reset_at: u64,
}

impl RateLimitInfo {
    /// Creates a new quota snapshot.
    #[must_use]
    pub const fn new(limit: u32, remaining: u32, reset_at: u64) -> Self {
        Self {
            limit,
            remaining,
            reset_at,
        }
    }

    /// Maximum requests allowed in the current window.
    #[must_use]
    pub const fn limit(&self) -> u32 {
        self.limit
    }

    /// Requests left in the current window.
    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Unix timestamp at which the window resets.
    #[must_use]
    pub const fn reset_at(&self) -> u64 {
        self.reset_at
    }

    /// Returns true when no requests remain.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }

    /// Seconds until the window resets, or 0 when it already has.
    #[must_use]
    pub fn seconds_until_reset(&self) -> u64 {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|duration| duration.as_secs())
            .unwrap_or(0);

        self.reset_at.saturating_sub(now)
    }
}
