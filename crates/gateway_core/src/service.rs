//! Request flows of the gateway.
//!
//! [`GatewayService`] implements the three read operations the HTTP layer
//! exposes. Each flow validates its inputs first, so malformed names are
//! rejected without touching GitHub, and classifies upstream failures into
//! "not found" versus everything else.

use std::sync::Arc;

use github_client::{AccountClient, AccountProfile, RepositoryDetails};
use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::errors::{GatewayError, GatewayResult, Resource};
use crate::listing::{list_repository_summaries, RepositoryBrief, RepositorySummary};
use crate::names::{AccountName, RepositoryName};
use crate::sorting::{sort_repositories, SortCriterion, SortDirection};

#[cfg(test)]
#[path = "service_tests.rs"]
mod tests;

/// An account profile, optionally enriched with the account's repositories.
///
/// Serializes as the upstream profile object with an additional `repos`
/// array when enrichment was requested. Without enrichment the output is
/// exactly the upstream profile.
#[derive(Debug, Clone, Serialize)]
pub struct EnrichedAccount {
    #[serde(flatten)]
    pub profile: AccountProfile,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub repos: Option<Vec<RepositoryBrief>>,
}

/// Entry point for the gateway's read operations.
///
/// The upstream client is injected once at startup and shared by all
/// requests. The service holds no other state.
#[derive(Clone)]
pub struct GatewayService {
    client: Arc<dyn AccountClient>,
}

impl GatewayService {
    /// Create a service that talks to GitHub through `client`.
    pub fn new(client: Arc<dyn AccountClient>) -> Self {
        Self { client }
    }

    /// Fetch an account profile.
    ///
    /// When `include_repos` is set the account's repositories are attached
    /// under `repos`. A failure while listing them fails the whole request,
    /// even though the profile itself was already retrieved.
    ///
    /// # Errors
    ///
    /// - `GatewayError::Validation` if `username` is not a valid account name
    /// - `GatewayError::NotFound` if the account does not exist
    /// - `GatewayError::Upstream` for any other upstream failure
    #[instrument(skip(self))]
    pub async fn get_account(
        &self,
        username: &str,
        include_repos: bool,
    ) -> GatewayResult<EnrichedAccount> {
        let account = AccountName::new(username)?;

        let profile = self.fetch_account(&account).await?;

        let repos = if include_repos {
            let briefs = list_repository_summaries::<RepositoryBrief>(&*self.client, &account)
                .await
                .map_err(|e| GatewayError::from_upstream(e, Resource::Account))?;
            Some(briefs)
        } else {
            None
        };

        info!(
            account = %account,
            enriched = include_repos,
            "Account profile retrieved"
        );

        Ok(EnrichedAccount { profile, repos })
    }

    /// List an account's repositories in the requested order.
    ///
    /// The account is looked up first so that a missing account is reported
    /// as such rather than as an empty listing.
    ///
    /// # Errors
    ///
    /// - `GatewayError::Validation` if `username` is not a valid account name
    /// - `GatewayError::NotFound` if the account does not exist
    /// - `GatewayError::Upstream` for any other upstream failure
    #[instrument(skip(self, sort, direction), fields(sort = %sort, direction = %direction))]
    pub async fn list_repositories(
        &self,
        username: &str,
        sort: SortCriterion,
        direction: SortDirection,
    ) -> GatewayResult<Vec<RepositorySummary>> {
        let account = AccountName::new(username)?;

        self.fetch_account(&account).await?;

        let mut repositories =
            list_repository_summaries::<RepositorySummary>(&*self.client, &account)
                .await
                .map_err(|e| GatewayError::from_upstream(e, Resource::Account))?;

        sort_repositories(&mut repositories, sort, direction);

        info!(
            account = %account,
            count = repositories.len(),
            "Repositories listed"
        );

        Ok(repositories)
    }

    /// Fetch the full record of one repository.
    ///
    /// # Errors
    ///
    /// - `GatewayError::Validation` if either name is invalid; the account
    ///   name is checked first
    /// - `GatewayError::NotFound` if the repository does not exist
    /// - `GatewayError::Upstream` for any other upstream failure
    #[instrument(skip(self))]
    pub async fn get_repository_details(
        &self,
        username: &str,
        repo: &str,
    ) -> GatewayResult<RepositoryDetails> {
        let owner = AccountName::new(username)?;
        let repository = RepositoryName::new(repo)?;

        self.client
            .get_repository(owner.as_str(), repository.as_str())
            .await
            .map_err(|e| {
                let err = GatewayError::from_upstream(e, Resource::Repository);
                if let GatewayError::NotFound { .. } = err {
                    warn!(owner = %owner, repo = %repository, "Repository not found");
                }
                err
            })
    }

    async fn fetch_account(&self, account: &AccountName) -> GatewayResult<AccountProfile> {
        self.client
            .get_account(account.as_str())
            .await
            .map_err(|e| {
                let err = GatewayError::from_upstream(e, Resource::Account);
                if let GatewayError::NotFound { .. } = err {
                    warn!(account = %account, "Account not found");
                }
                err
            })
    }
}
