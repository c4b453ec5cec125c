//! Test doubles shared by the unit tests of this crate.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use github_client::{AccountClient, AccountProfile, Error, RepositoryDetails, RepositoryRecord};
use serde_json::json;

/// The upstream operations the mock can be asked to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Operation {
    GetAccount,
    ListRepositories,
    GetRepository,
}

/// How a failing operation fails.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Failure {
    NotFound,
    RateLimited,
    ServerError,
}

impl Failure {
    fn to_error(self) -> Error {
        match self {
            Failure::NotFound => Error::NotFound,
            Failure::RateLimited => Error::RateLimitExceeded,
            Failure::ServerError => Error::ApiError {
                status: 500,
                message: "Server Error".to_string(),
            },
        }
    }
}

/// In-memory `AccountClient` that records every call it receives.
#[derive(Default)]
pub(crate) struct MockAccountClient {
    accounts: HashMap<String, AccountProfile>,
    repositories: HashMap<String, Vec<RepositoryRecord>>,
    details: HashMap<(String, String), RepositoryDetails>,
    failures: HashMap<Operation, Failure>,
    calls: Mutex<Vec<Operation>>,
}

impl MockAccountClient {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_account(mut self, login: &str) -> Self {
        self.accounts.insert(login.to_string(), profile(login));
        self
    }

    pub(crate) fn with_repositories(mut self, login: &str, records: Vec<RepositoryRecord>) -> Self {
        self.repositories.insert(login.to_string(), records);
        self
    }

    pub(crate) fn with_repository_details(mut self, owner: &str, repo: &str) -> Self {
        let details = serde_json::from_value(json!({
            "name": repo,
            "full_name": format!("{owner}/{repo}"),
            "private": false,
            "stargazers_count": 7
        }))
        .unwrap();
        self.details
            .insert((owner.to_string(), repo.to_string()), details);
        self
    }

    pub(crate) fn failing(mut self, operation: Operation, failure: Failure) -> Self {
        self.failures.insert(operation, failure);
        self
    }

    pub(crate) fn calls(&self) -> Vec<Operation> {
        self.calls.lock().unwrap().clone()
    }

    fn record_call(&self, operation: Operation) -> Result<(), Error> {
        self.calls.lock().unwrap().push(operation);
        match self.failures.get(&operation) {
            Some(failure) => Err(failure.to_error()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl AccountClient for MockAccountClient {
    async fn get_account(&self, username: &str) -> Result<AccountProfile, Error> {
        self.record_call(Operation::GetAccount)?;
        self.accounts.get(username).cloned().ok_or(Error::NotFound)
    }

    async fn list_repositories(&self, username: &str) -> Result<Vec<RepositoryRecord>, Error> {
        self.record_call(Operation::ListRepositories)?;
        if !self.accounts.contains_key(username) {
            return Err(Error::NotFound);
        }
        Ok(self.repositories.get(username).cloned().unwrap_or_default())
    }

    async fn get_repository(&self, owner: &str, repo: &str) -> Result<RepositoryDetails, Error> {
        self.record_call(Operation::GetRepository)?;
        self.details
            .get(&(owner.to_string(), repo.to_string()))
            .cloned()
            .ok_or(Error::NotFound)
    }
}

pub(crate) fn profile(login: &str) -> AccountProfile {
    serde_json::from_value(json!({
        "login": login,
        "id": 1,
        "type": "User",
        "html_url": format!("https://github.com/{login}"),
        "public_repos": 3
    }))
    .unwrap()
}

/// Timestamp on 2024-01-`day` at noon UTC.
pub(crate) fn day(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, day, 12, 0, 0).unwrap()
}

pub(crate) fn record(
    name: &str,
    created: Option<DateTime<Utc>>,
    updated: Option<DateTime<Utc>>,
    pushed: Option<DateTime<Utc>>,
) -> RepositoryRecord {
    RepositoryRecord {
        name: name.to_string(),
        html_url: format!("https://github.com/octocat/{name}"),
        description: Some(format!("The {name} repository")),
        created_at: created,
        updated_at: updated,
        pushed_at: pushed,
    }
}

pub(crate) fn named(name: &str) -> RepositoryRecord {
    record(name, Some(day(1)), Some(day(1)), Some(day(1)))
}
