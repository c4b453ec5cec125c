//! HTTP request type definitions
//!
//! All gateway endpoints are `GET`, so requests carry their input in the
//! path and the query string. Handlers extract the query as raw key/value
//! pairs and build these models from them, which means no query string is
//! ever rejected: unrecognized values fall back to defaults during
//! translation.
//!
//! A key that appears more than once is a list rather than a single value.
//! Lists match none of the recognized values, so they behave exactly like
//! an absent key.

/// Query string of `GET /api/github/user/:username`.
///
/// # Example
///
/// ```text
/// GET /api/github/user/octocat?include_repos=true
/// ```
#[derive(Debug, Clone, Default)]
pub struct GetUserQuery {
    /// Enrichment flag; only the exact string `"true"` enables it
    pub include_repos: Option<String>,
}

impl GetUserQuery {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            include_repos: single_value(pairs, "include_repos"),
        }
    }

    /// Whether the repository list should be attached to the profile.
    ///
    /// `"TRUE"`, `"1"` and `"yes"` all leave enrichment off.
    pub fn include_repos(&self) -> bool {
        self.include_repos.as_deref() == Some("true")
    }
}

/// Query string of `GET /api/github/user/:username/repos`.
///
/// # Example
///
/// ```text
/// GET /api/github/user/octocat/repos?sort=updated&direction=desc
/// ```
#[derive(Debug, Clone, Default)]
pub struct ListRepositoriesQuery {
    /// One of `created`, `updated`, `pushed`, `full_name`
    pub sort: Option<String>,

    /// `asc` or `desc`
    pub direction: Option<String>,
}

impl ListRepositoriesQuery {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            sort: single_value(pairs, "sort"),
            direction: single_value(pairs, "direction"),
        }
    }
}

/// The value of `key` if it occurs exactly once.
fn single_value(pairs: &[(String, String)], key: &str) -> Option<String> {
    let mut values = pairs
        .iter()
        .filter(|(name, _)| name == key)
        .map(|(_, value)| value);

    match (values.next(), values.next()) {
        (Some(value), None) => Some(value.clone()),
        _ => None,
    }
}

#[cfg(test)]
#[path = "request_tests.rs"]
mod tests;
