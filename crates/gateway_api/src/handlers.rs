//! HTTP request handlers
//!
//! Handlers extract path and query values, delegate to `GatewayService`,
//! and serialize the result. Errors are converted through `ApiError`.
//!
//! Query strings are extracted as raw pairs, so no query string is rejected.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use gateway_core::{EnrichedAccount, RepositorySummary};
use github_client::RepositoryDetails;

use crate::{
    errors::ApiError,
    models::{GetUserQuery, HealthCheckResponse, ListRepositoriesQuery},
    translation::http_list_query_to_domain,
    AppState,
};

/// GET /api/github/user/:username
///
/// Account profile, with the repository list attached under `repos` when
/// `include_repos=true`.
pub async fn get_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<EnrichedAccount>, ApiError> {
    let query = GetUserQuery::from_pairs(&params);

    let account = state
        .service
        .get_account(&username, query.include_repos())
        .await?;

    Ok(Json(account))
}

/// GET /api/github/user/:username/repos
///
/// Repository summaries, ordered by `sort` and `direction`.
pub async fn list_user_repositories(
    State(state): State<AppState>,
    Path(username): Path<String>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<RepositorySummary>>, ApiError> {
    let query = ListRepositoriesQuery::from_pairs(&params);
    let (sort, direction) = http_list_query_to_domain(&query);

    let repositories = state
        .service
        .list_repositories(&username, sort, direction)
        .await?;

    Ok(Json(repositories))
}

/// GET /api/github/user/:username/repos/:repo
pub async fn get_repository_details(
    State(state): State<AppState>,
    Path((username, repo)): Path<(String, String)>,
) -> Result<Json<RepositoryDetails>, ApiError> {
    let details = state
        .service
        .get_repository_details(&username, &repo)
        .await?;

    Ok(Json(details))
}

/// GET /api/health
///
/// Returns service health status with version and timestamp.
pub async fn health_check() -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse::healthy())
}

#[cfg(test)]
#[path = "handlers_tests.rs"]
mod tests;
