//! Repository listing and projection.
//!
//! GitHub's repository listing carries dozens of fields per entry. The
//! gateway exposes two compact shapes of it: [`RepositorySummary`] for the
//! repository listing endpoint and the narrower [`RepositoryBrief`] embedded
//! in account profiles.

use chrono::{DateTime, Utc};
use github_client::{AccountClient, RepositoryRecord};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::names::AccountName;

#[cfg(test)]
#[path = "listing_tests.rs"]
mod tests;

/// Full projection of a repository listing entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositorySummary {
    pub name: String,
    pub html_url: String,
    pub description: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
    pub pushed_at: Option<DateTime<Utc>>,
}

impl From<RepositoryRecord> for RepositorySummary {
    fn from(record: RepositoryRecord) -> Self {
        Self {
            name: record.name,
            html_url: record.html_url,
            description: record.description,
            updated_at: record.updated_at,
            created_at: record.created_at,
            pushed_at: record.pushed_at,
        }
    }
}

/// Narrow projection used when repositories are embedded in an account profile.
///
/// Has no creation or push timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositoryBrief {
    pub name: String,
    pub html_url: String,
    pub description: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<RepositoryRecord> for RepositoryBrief {
    fn from(record: RepositoryRecord) -> Self {
        Self {
            name: record.name,
            html_url: record.html_url,
            description: record.description,
            updated_at: record.updated_at,
        }
    }
}

/// Lists the repositories of `account` projected into the shape `S`.
///
/// The projection is picked by the caller through the type parameter,
/// e.g. `list_repository_summaries::<RepositoryBrief>(..)`. Entries keep the
/// order GitHub returned them in; ordering is up to the caller.
///
/// # Errors
///
/// Upstream failures are returned unchanged so the caller can classify them.
pub async fn list_repository_summaries<S>(
    client: &dyn AccountClient,
    account: &AccountName,
) -> Result<Vec<S>, github_client::Error>
where
    S: From<RepositoryRecord>,
{
    let records = client.list_repositories(account.as_str()).await?;

    debug!(
        account = %account,
        count = records.len(),
        "Projecting repository records"
    );

    Ok(records.into_iter().map(S::from).collect())
}
