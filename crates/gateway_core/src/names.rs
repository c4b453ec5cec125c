//! GitHub account and repository name validation.
//!
//! Names arrive as raw URL path segments. They are checked here before any
//! upstream call is made, so malformed input never reaches GitHub.

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

#[cfg(test)]
#[path = "names_tests.rs"]
mod tests;

/// Maximum length of a GitHub account name.
pub const MAX_ACCOUNT_NAME_LENGTH: usize = 39;

/// Maximum length of a repository name accepted by the gateway.
pub const MAX_REPOSITORY_NAME_LENGTH: usize = 100;

/// Checks a GitHub user or organization name.
///
/// # Validation Rules
/// - Length: 1-39 characters
/// - Characters: ASCII letters, digits and hyphens (any case)
/// - Must not start or end with a hyphen
/// - No consecutive hyphens
pub fn is_valid_account_name(name: &str) -> bool {
    if name.is_empty() || name.len() > MAX_ACCOUNT_NAME_LENGTH {
        return false;
    }

    if !name.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-') {
        return false;
    }

    !(name.starts_with('-') || name.ends_with('-') || name.contains("--"))
}

/// Checks a repository name.
///
/// # Validation Rules
/// - Length: 1-100 characters
/// - Characters: ASCII letters, digits and hyphens (any case)
///
/// Unlike account names, leading, trailing and repeated hyphens are accepted.
pub fn is_valid_repository_name(name: &str) -> bool {
    !name.is_empty()
        && name.len() <= MAX_REPOSITORY_NAME_LENGTH
        && name.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
}

/// Validated GitHub account name
///
/// Represents a user or organization login that passed
/// [`is_valid_account_name`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AccountName(String);

impl AccountName {
    /// Create a new account name with validation
    ///
    /// # Errors
    /// Returns `ValidationError::InvalidAccountName` if validation fails
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();

        if !is_valid_account_name(&name) {
            return Err(ValidationError::InvalidAccountName { value: name });
        }

        Ok(Self(name))
    }

    /// Get the account name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AccountName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for AccountName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for AccountName {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AccountName> for String {
    fn from(name: AccountName) -> Self {
        name.0
    }
}

/// Validated repository name
///
/// Represents a repository name that passed [`is_valid_repository_name`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RepositoryName(String);

impl RepositoryName {
    /// Create a new repository name with validation
    ///
    /// # Errors
    /// Returns `ValidationError::InvalidRepositoryName` if validation fails
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();

        if !is_valid_repository_name(&name) {
            return Err(ValidationError::InvalidRepositoryName { value: name });
        }

        Ok(Self(name))
    }

    /// Get the repository name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RepositoryName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for RepositoryName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for RepositoryName {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RepositoryName> for String {
    fn from(name: RepositoryName) -> Self {
        name.0
    }
}
