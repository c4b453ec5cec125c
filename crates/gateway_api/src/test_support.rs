//! Test doubles for exercising the HTTP layer without a real upstream.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use gateway_core::GatewayService;
use github_client::{AccountClient, AccountProfile, Error, RepositoryDetails, RepositoryRecord};
use serde_json::json;

use crate::AppState;

/// `AccountClient` backed by fixed data, counting every upstream call.
#[derive(Default)]
pub(crate) struct StubClient {
    accounts: HashMap<String, AccountProfile>,
    repositories: HashMap<String, Vec<RepositoryRecord>>,
    details: HashMap<(String, String), RepositoryDetails>,
    broken: bool,
    calls: Mutex<Vec<String>>,
}

impl StubClient {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_account(mut self, login: &str, repositories: &[(&str, &str)]) -> Self {
        let profile = serde_json::from_value(json!({
            "login": login,
            "id": 583231,
            "public_repos": repositories.len(),
            "html_url": format!("https://github.com/{login}")
        }))
        .unwrap();
        self.accounts.insert(login.to_string(), profile);

        let records = repositories
            .iter()
            .map(|(name, updated)| RepositoryRecord {
                name: name.to_string(),
                html_url: format!("https://github.com/{login}/{name}"),
                description: Some(format!("The {name} repository")),
                created_at: Some("2020-01-01T00:00:00Z".parse().unwrap()),
                updated_at: Some(updated.parse().unwrap()),
                pushed_at: None,
            })
            .collect();
        self.repositories.insert(login.to_string(), records);
        self
    }

    pub(crate) fn with_repository(mut self, owner: &str, repo: &str) -> Self {
        let details = serde_json::from_value(json!({
            "name": repo,
            "full_name": format!("{owner}/{repo}"),
            "private": false,
            "forks_count": 12
        }))
        .unwrap();
        self.details
            .insert((owner.to_string(), repo.to_string()), details);
        self
    }

    /// Every call fails with a non-404 upstream error.
    pub(crate) fn broken(mut self) -> Self {
        self.broken = true;
        self
    }

    pub(crate) fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn record(&self, call: String) -> Result<(), Error> {
        self.calls.lock().unwrap().push(call);
        if self.broken {
            return Err(Error::ApiError {
                status: 502,
                message: "Bad Gateway".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl AccountClient for StubClient {
    async fn get_account(&self, username: &str) -> Result<AccountProfile, Error> {
        self.record(format!("get_account {username}"))?;
        self.accounts.get(username).cloned().ok_or(Error::NotFound)
    }

    async fn list_repositories(&self, username: &str) -> Result<Vec<RepositoryRecord>, Error> {
        self.record(format!("list_repositories {username}"))?;
        self.repositories
            .get(username)
            .cloned()
            .ok_or(Error::NotFound)
    }

    async fn get_repository(&self, owner: &str, repo: &str) -> Result<RepositoryDetails, Error> {
        self.record(format!("get_repository {owner}/{repo}"))?;
        self.details
            .get(&(owner.to_string(), repo.to_string()))
            .cloned()
            .ok_or(Error::NotFound)
    }
}

/// Wrap a stub in application state, keeping a handle for call assertions.
pub(crate) fn state_with(client: StubClient) -> (AppState, Arc<StubClient>) {
    let client = Arc::new(client);
    let service = GatewayService::new(client.clone());
    (AppState::new(service), client)
}
