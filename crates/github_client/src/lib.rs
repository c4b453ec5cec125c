//! Crate for reading public account and repository data from the GitHub REST API.
//!
//! The [`AccountClient`] trait is the seam the rest of the workspace codes
//! against. [`GitHubClient`] implements it on top of `octocrab`; tests can
//! substitute their own implementation.

use async_trait::async_trait;
use octocrab::{Octocrab, Result as OctocrabResult};
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, error, info, instrument};

pub mod errors;
pub use errors::Error;

pub mod models;
pub use models::{AccountProfile, RepositoryDetails, RepositoryRecord};

// Reference the tests module in the separate file
#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

/// Read-only access to GitHub accounts and their repositories.
///
/// Every method reports a missing account or repository as
/// [`Error::NotFound`] so callers can tell it apart from other failures.
#[async_trait]
pub trait AccountClient: Send + Sync {
    /// Fetches the profile of a user or organization account.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotFound` if the account does not exist, or another
    /// `Error` variant if the request fails.
    async fn get_account(&self, username: &str) -> Result<AccountProfile, Error>;

    /// Lists the repositories owned by an account.
    ///
    /// Only the first page GitHub returns by default is fetched. The order is
    /// the order GitHub returned.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotFound` if the account does not exist, or another
    /// `Error` variant if the request fails.
    async fn list_repositories(&self, username: &str) -> Result<Vec<RepositoryRecord>, Error>;

    /// Fetches the full record of a single repository.
    ///
    /// # Arguments
    ///
    /// * `owner` - The owner of the repository (user or organization name).
    /// * `repo` - The name of the repository.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotFound` if the repository does not exist, or another
    /// `Error` variant if the request fails.
    async fn get_repository(&self, owner: &str, repo: &str) -> Result<RepositoryDetails, Error>;
}

/// A client for the GitHub REST API backed by `octocrab`.
#[derive(Debug)]
pub struct GitHubClient {
    client: Octocrab,
}

impl GitHubClient {
    /// Wraps an already configured `Octocrab` instance.
    ///
    /// Use [`create_token_client`] to build one from the gateway configuration.
    pub fn new(client: Octocrab) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AccountClient for GitHubClient {
    #[instrument(skip(self), fields(username = %username))]
    async fn get_account(&self, username: &str) -> Result<AccountProfile, Error> {
        let path = format!("/users/{}", username);
        let result: OctocrabResult<AccountProfile> = self.client.get(path, None::<&()>).await;
        match result {
            Ok(profile) => {
                debug!(username = username, "Retrieved account profile");
                Ok(profile)
            }
            Err(e) => Err(classify_octocrab_error("Failed to get account", e)),
        }
    }

    #[instrument(skip(self), fields(username = %username))]
    async fn list_repositories(&self, username: &str) -> Result<Vec<RepositoryRecord>, Error> {
        let path = format!("/users/{}/repos", username);
        let result: OctocrabResult<Vec<RepositoryRecord>> =
            self.client.get(path, None::<&()>).await;
        match result {
            Ok(repositories) => {
                info!(
                    username = username,
                    count = repositories.len(),
                    "Retrieved repositories for account"
                );
                Ok(repositories)
            }
            Err(e) => Err(classify_octocrab_error(
                "Failed to list repositories for account",
                e,
            )),
        }
    }

    #[instrument(skip(self), fields(owner = %owner, repo = %repo))]
    async fn get_repository(&self, owner: &str, repo: &str) -> Result<RepositoryDetails, Error> {
        let path = format!("/repos/{}/{}", owner, repo);
        let result: OctocrabResult<RepositoryDetails> = self.client.get(path, None::<&()>).await;
        match result {
            Ok(details) => Ok(details),
            Err(e) => Err(classify_octocrab_error("Failed to get repository", e)),
        }
    }
}

/// Creates an `Octocrab` client for the public REST API.
///
/// When a token is given the client authenticates with it as a personal
/// access token, which raises the rate limit. Without a token requests are
/// made anonymously.
///
/// # Arguments
///
/// * `token` - The optional personal access token.
/// * `base_uri` - An alternative API root, e.g. a GitHub Enterprise server.
///
/// # Errors
///
/// Returns `Error::AuthError` if the base URI is invalid or the client cannot
/// be built.
///
/// # Example
///
/// ```rust,no_run
/// use github_client::{create_token_client, GitHubClient};
/// use secrecy::SecretString;
///
/// let token = SecretString::from("ghp_example".to_string());
/// let octocrab = create_token_client(Some(&token), None)?;
/// let client = GitHubClient::new(octocrab);
/// # Ok::<(), github_client::Error>(())
/// ```
#[instrument(skip(token))]
pub fn create_token_client(
    token: Option<&SecretString>,
    base_uri: Option<&str>,
) -> Result<Octocrab, Error> {
    let mut builder = Octocrab::builder();

    if let Some(uri) = base_uri {
        builder = builder.base_uri(uri).map_err(|e| {
            error!(base_uri = uri, error = %e, "Invalid GitHub API base URI");
            Error::AuthError(format!("Invalid GitHub API base URI '{}'", uri))
        })?;
    }

    match token {
        Some(token) => builder = builder.personal_token(token.expose_secret().to_string()),
        None => info!("No GitHub token configured, using anonymous access"),
    }

    builder.build().map_err(|e| {
        error!(error = ?e, "Failed to build Octocrab client");
        Error::AuthError("Failed to build the GitHub client.".to_string())
    })
}

/// Maps an `octocrab` failure onto the client error taxonomy and logs it.
///
/// Missing resources are expected during normal operation and are only
/// logged at debug level.
fn classify_octocrab_error(message: &str, e: octocrab::Error) -> Error {
    let classified = match &e {
        octocrab::Error::GitHub { source, .. } => match source.status_code.as_u16() {
            404 => Error::NotFound,
            401 => Error::AuthError(source.message.clone()),
            403 | 429 if source.message.to_lowercase().contains("rate limit") => {
                Error::RateLimitExceeded
            }
            status => Error::ApiError {
                status,
                message: source.message.clone(),
            },
        },
        _ => Error::InvalidResponse,
    };

    if classified.is_not_found() {
        debug!("{}. GitHub reported the resource as not found", message);
    } else {
        log_octocrab_error(message, e);
    }

    classified
}

fn log_octocrab_error(message: &str, e: octocrab::Error) {
    match e {
        octocrab::Error::GitHub { source, backtrace } => {
            let err = source;
            error!(
                error_message = err.message,
                status = err.status_code.as_u16(),
                backtrace = backtrace.to_string(),
                "{}. Received an error from GitHub",
                message
            )
        }
        octocrab::Error::UriParse { source, backtrace } => error!(
            error_message = source.to_string(),
            backtrace = backtrace.to_string(),
            "{}. Failed to parse URI.",
            message
        ),

        octocrab::Error::Uri { source, backtrace } => error!(
            error_message = source.to_string(),
            backtrace = backtrace.to_string(),
            "{}, Failed to parse URI.",
            message
        ),
        octocrab::Error::InvalidHeaderValue { source, backtrace } => error!(
            error_message = source.to_string(),
            backtrace = backtrace.to_string(),
            "{}. One of the header values was invalid.",
            message
        ),
        octocrab::Error::InvalidUtf8 { source, backtrace } => error!(
            error_message = source.to_string(),
            backtrace = backtrace.to_string(),
            "{}. The message wasn't valid UTF-8.",
            message,
        ),
        _ => error!(error_message = e.to_string(), message),
    };
}
