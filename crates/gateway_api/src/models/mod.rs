//! HTTP request and response models
//!
//! These types exist only in the HTTP layer. Query models are translated to
//! domain values in `crate::translation`; domain results are serialized
//! directly.

pub mod request;
pub mod response;

// Re-export commonly used types
pub use request::{GetUserQuery, ListRepositoriesQuery};
pub use response::HealthCheckResponse;
