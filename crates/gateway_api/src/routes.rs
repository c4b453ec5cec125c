//! HTTP routing configuration
//!
//! This module defines all HTTP routes and their corresponding handlers.
//!
//! # Route Structure
//!
//! - GET /api/github/user/:username - Account profile, optionally enriched
//! - GET /api/github/user/:username/repos - Sorted repository summaries
//! - GET /api/github/user/:username/repos/:repo - Full repository record
//! - GET /api/health - Health check
//! - GET /api, /api/ - Documentation page
//!
//! Any other path is served from the public directory.

use axum::{
    http::{header, Method},
    middleware,
    routing::get,
    Router,
};
use std::path::Path;
use std::time::Duration;
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};

use crate::{handlers, middleware as api_middleware, AppState, API_PREFIX};

/// Create the complete router with all routes configured.
///
/// This function sets up:
/// - The gateway endpoints under `/api`
/// - The documentation page and static file fallback
/// - CORS configuration
/// - Request tracing
pub fn create_router(state: AppState, public_dir: &Path) -> Router {
    // Read-only API, any origin may call it
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .allow_credentials(false)
        .max_age(Duration::from_secs(3600));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().include_headers(true))
        .on_response(DefaultOnResponse::new().include_headers(true));

    let docs = ServeFile::new(public_dir.join("index.html"));

    Router::new()
        .nest(API_PREFIX, api_routes())
        .route_service(API_PREFIX, docs.clone())
        .route_service(&format!("{}/", API_PREFIX), docs)
        .fallback_service(ServeDir::new(public_dir))
        .layer(middleware::from_fn(api_middleware::tracing_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}

/// Gateway routes (nested under /api)
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/github/user/:username", get(handlers::get_user))
        .route(
            "/github/user/:username/repos",
            get(handlers::list_user_repositories),
        )
        .route(
            "/github/user/:username/repos/:repo",
            get(handlers::get_repository_details),
        )
        .route("/health", get(handlers::health_check))
}

#[cfg(test)]
#[path = "routes_tests.rs"]
mod tests;
