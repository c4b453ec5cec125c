//! GitHub gateway REST API
//!
//! This crate exposes the gateway's read operations over HTTP. It exists in
//! the HTTP layer and handles:
//! - Routing and server configuration
//! - Translation of path and query parameters
//! - Error mapping from domain to HTTP
//! - Request tracing and static documentation
//!
//! The business logic lives in `gateway_core`. The dependency flows
//! HTTP API → business logic, never the reverse.

pub mod config;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod server;
pub mod translation;

#[cfg(test)]
mod test_support;

use gateway_core::GatewayService;

// Re-export key types for convenience
pub use config::{ConfigError, GatewayConfig};
pub use errors::{ApiError, ErrorResponse};
pub use server::GatewayServer;

/// Path prefix of every API route
pub const API_PREFIX: &str = "/api";

/// Default API port
pub const DEFAULT_PORT: u16 = 3001;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// The gateway flows, holding the upstream client built at startup
    pub service: GatewayService,
}

impl AppState {
    /// Create new application state around an already wired service
    pub fn new(service: GatewayService) -> Self {
        Self { service }
    }
}
