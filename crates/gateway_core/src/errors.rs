//! Error types for the gateway flows.
//!
//! Every failure a request can run into falls in one of three buckets:
//! the caller sent a malformed name, GitHub reported the requested resource
//! as missing, or the upstream call failed in some other way. The HTTP layer
//! maps these onto 400, 404 and 500 respectively.

use std::fmt;

use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Result alias used by the gateway flows.
pub type GatewayResult<T> = Result<T, GatewayError>;

/// A path parameter that failed name validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("'{value}' is not a valid GitHub account name")]
    InvalidAccountName { value: String },

    #[error("'{value}' is not a valid GitHub repository name")]
    InvalidRepositoryName { value: String },
}

impl ValidationError {
    /// The rejected input, exactly as received.
    pub fn value(&self) -> &str {
        match self {
            ValidationError::InvalidAccountName { value }
            | ValidationError::InvalidRepositoryName { value } => value,
        }
    }
}

/// The kind of upstream resource a lookup was for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Account,
    Repository,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::Account => write!(f, "account"),
            Resource::Repository => write!(f, "repository"),
        }
    }
}

/// Failure of a gateway request.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Input was rejected before any upstream call was made.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// GitHub reported the resource as missing.
    #[error("The requested {resource} does not exist")]
    NotFound { resource: Resource },

    /// Any other upstream failure (network, credentials, rate limiting, bad payloads).
    #[error("Upstream request failed: {0}")]
    Upstream(#[source] github_client::Error),
}

impl GatewayError {
    /// Classifies an upstream failure for a lookup of `resource`.
    ///
    /// Only a not-found answer is distinguished; everything else is an
    /// upstream failure.
    pub fn from_upstream(err: github_client::Error, resource: Resource) -> Self {
        if err.is_not_found() {
            GatewayError::NotFound { resource }
        } else {
            GatewayError::Upstream(err)
        }
    }
}
