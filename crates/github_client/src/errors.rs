//! Error types for GitHub client operations.
//!
//! This module defines the errors returned by the upstream client. Callers
//! mostly care about one distinction: whether GitHub reported that the
//! requested resource does not exist (`Error::NotFound`) or whether the
//! request failed for any other reason.

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur during GitHub client operations.
///
/// ## Examples
///
/// ```rust,ignore
/// use github_client::Error;
///
/// match client.get_account("octocat").await {
///     Ok(profile) => println!("Found {:?}", profile.login()),
///     Err(Error::NotFound) => eprintln!("No such account"),
///     Err(err) => eprintln!("Upstream failure: {}", err),
/// }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// GitHub answered with an error status other than the ones classified below.
    ///
    /// The status code and the message GitHub attached to the response are kept
    /// for logging. They must not be forwarded to callers of the gateway.
    #[error("GitHub API request failed with status {status}: {message}")]
    ApiError { status: u16, message: String },

    /// The configured credentials were rejected, or the client could not be built.
    #[error("Failed to authenticate or initialize GitHub client: {0}")]
    AuthError(String),

    /// The request failed before a usable GitHub response was received.
    ///
    /// Covers transport failures, invalid URIs and bodies that could not be
    /// decoded by octocrab.
    #[error("Invalid response format")]
    InvalidResponse,

    /// The requested resource was not found.
    ///
    /// GitHub answered with a 404 status code. For public lookups this means the
    /// account or repository does not exist (or is not visible to the token).
    #[error("Resource not found")]
    NotFound,

    /// GitHub API rate limit has been exceeded.
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

impl Error {
    /// Returns `true` when GitHub reported that the resource does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound)
    }
}
