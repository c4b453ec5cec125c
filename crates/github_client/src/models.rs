//! # Models
//!
//! Data models for the GitHub records the gateway reads.
//!
//! Account profiles and repository details are passed through to callers
//! unchanged, so they are kept as raw JSON objects rather than mapped onto a
//! fixed struct. Repository listings are only ever projected into smaller
//! shapes, so only the fields needed for that projection are deserialized.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[cfg(test)]
#[path = "models_tests.rs"]
mod tests;

/// A GitHub account record as returned by `GET /users/{username}`.
///
/// Every field GitHub sends is preserved and serialized back out verbatim.
///
/// # Examples
///
/// ```
/// use github_client::models::AccountProfile;
///
/// let profile: AccountProfile = serde_json::from_value(serde_json::json!({
///     "login": "octocat",
///     "id": 583231,
/// }))
/// .unwrap();
///
/// assert_eq!(profile.login(), Some("octocat"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountProfile(Map<String, Value>);

impl AccountProfile {
    /// Returns the login name reported by GitHub, if present.
    pub fn login(&self) -> Option<&str> {
        self.0.get("login").and_then(Value::as_str)
    }

    /// Returns the raw JSON fields of the profile.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for AccountProfile {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

/// A GitHub repository record as returned by `GET /repos/{owner}/{repo}`.
///
/// Like [`AccountProfile`] this keeps the complete upstream object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RepositoryDetails(Map<String, Value>);

impl RepositoryDetails {
    /// Returns the repository name, if present.
    pub fn name(&self) -> Option<&str> {
        self.0.get("name").and_then(Value::as_str)
    }

    /// Returns the `owner/name` form of the repository, if present.
    pub fn full_name(&self) -> Option<&str> {
        self.0.get("full_name").and_then(Value::as_str)
    }

    /// Returns the raw JSON fields of the repository.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for RepositoryDetails {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

/// One entry of `GET /users/{username}/repos`.
///
/// Only the fields the gateway projects are read; everything else in the
/// upstream payload is ignored. Timestamps are optional because GitHub
/// reports `pushed_at: null` for repositories that never received a push.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositoryRecord {
    /// The name of the repository (without owner)
    pub name: String,
    /// The browser URL of the repository
    pub html_url: String,
    /// The free-form description, `null` when unset
    pub description: Option<String>,
    /// When the repository was created
    pub created_at: Option<DateTime<Utc>>,
    /// When the repository metadata was last updated
    pub updated_at: Option<DateTime<Utc>>,
    /// When a commit was last pushed
    pub pushed_at: Option<DateTime<Utc>>,
}
