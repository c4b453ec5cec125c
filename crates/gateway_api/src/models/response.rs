//! HTTP response type definitions
//!
//! Gateway payloads (`EnrichedAccount`, `RepositorySummary`,
//! `RepositoryDetails`) are serialized straight from the domain types. Only
//! the operational responses are defined here.

use serde::{Deserialize, Serialize};

/// Health check response
///
/// # Example
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "timestamp": "2024-01-15T10:30:00+00:00"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    /// Always "healthy" while the process can answer
    pub status: String,

    /// Crate version of the running binary
    pub version: String,

    /// Current timestamp (ISO 8601)
    pub timestamp: String,
}

impl HealthCheckResponse {
    /// A healthy response stamped with the current time and crate version.
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
#[path = "response_tests.rs"]
mod tests;
