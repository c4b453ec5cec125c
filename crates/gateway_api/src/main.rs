//! GitHub gateway server
//!
//! Main binary for running the gateway in production or development.
//!
//! # Environment Variables
//!
//! - `PORT`: Port to listen on (default: 3001)
//! - `HOST`: Host to bind to (default: 0.0.0.0)
//! - `GITHUB_TOKEN`: Token for upstream requests (default: anonymous)
//! - `GITHUB_API_URL`: Upstream base URL (default: https://api.github.com)
//! - `PUBLIC_DIR`: Documentation directory (default: public)
//! - `RUST_LOG`: Log level (default: info)
//!
//! A `.env` file in the working directory is loaded first, if present.

use std::sync::Arc;

use anyhow::Context;
use gateway_api::{AppState, GatewayConfig, GatewayServer};
use gateway_core::GatewayService;
use github_client::{create_token_client, GitHubClient};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = GatewayConfig::from_env().context("Invalid gateway configuration")?;

    let base_uri = config.github_base_uri();
    let octocrab = create_token_client(config.github_token.as_ref(), base_uri.as_deref())
        .context("Failed to create GitHub client")?;

    let service = GatewayService::new(Arc::new(GitHubClient::new(octocrab)));
    let server = GatewayServer::new(&config, AppState::new(service));

    tracing::info!(
        upstream = base_uri.as_deref().unwrap_or("https://api.github.com"),
        authenticated = config.github_token.is_some(),
        "Upstream configured"
    );

    // Start server with graceful shutdown
    server.serve().await
}
