//! Listener lifecycle of the gateway.
//!
//! The server owns the bound address and the documentation directory taken
//! from [`GatewayConfig`]; everything request-related lives in the router.

use std::future;
use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use axum::Router;
use tokio::net::TcpListener;
use tokio::signal;

use crate::{routes, AppState, GatewayConfig};

/// The gateway's HTTP listener.
pub struct GatewayServer {
    listen_addr: SocketAddr,
    public_dir: PathBuf,
    state: AppState,
}

impl GatewayServer {
    pub fn new(config: &GatewayConfig, state: AppState) -> Self {
        Self {
            listen_addr: config.listen_addr,
            public_dir: config.public_dir.clone(),
            state,
        }
    }

    /// The router the listener serves.
    pub fn router(&self) -> Router {
        routes::create_router(self.state.clone(), &self.public_dir)
    }

    /// Bind the configured address and serve until CTRL+C or SIGTERM.
    ///
    /// In-flight requests are allowed to finish before this returns.
    ///
    /// # Errors
    ///
    /// Fails if the address cannot be bound or the accept loop stops with an
    /// I/O error.
    pub async fn serve(self) -> anyhow::Result<()> {
        let docs_page = self.public_dir.join("index.html");
        if !docs_page.is_file() {
            tracing::warn!(
                path = %docs_page.display(),
                "Documentation page missing, /api will answer 404"
            );
        }

        let listener = TcpListener::bind(self.listen_addr)
            .await
            .with_context(|| format!("Cannot bind gateway listener to {}", self.listen_addr))?;

        tracing::info!(
            addr = %self.listen_addr,
            public_dir = %self.public_dir.display(),
            "GitHub gateway listening"
        );

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("Gateway listener failed")?;

        tracing::info!("GitHub gateway stopped");

        Ok(())
    }
}

/// Resolves on the first shutdown signal.
///
/// A signal source that cannot be installed is logged and then never fires,
/// leaving the other one in charge.
async fn shutdown_signal() {
    let interrupt = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Cannot listen for CTRL+C");
            future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Cannot listen for SIGTERM");
                future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = future::pending::<()>();

    let received = tokio::select! {
        _ = interrupt => "SIGINT",
        _ = terminate => "SIGTERM",
    };

    tracing::info!(signal = received, "Shutting down, draining in-flight requests");
}

#[cfg(test)]
#[path = "server_tests.rs"]
mod tests;
