//! Business logic of the GitHub gateway.
//!
//! This crate validates account and repository names, projects and orders
//! repository listings, and runs the three read flows the gateway offers.
//! It talks to GitHub only through [`github_client::AccountClient`] and knows
//! nothing about HTTP; the `gateway_api` crate maps its results and errors
//! onto responses.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use gateway_core::{GatewayService, SortCriterion, SortDirection};
//! use github_client::{create_token_client, GitHubClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GitHubClient::new(create_token_client(None, None)?);
//! let service = GatewayService::new(Arc::new(client));
//!
//! let repos = service
//!     .list_repositories("octocat", SortCriterion::Updated, SortDirection::Asc)
//!     .await?;
//! println!("{} repositories", repos.len());
//! # Ok(())
//! # }
//! ```

mod errors;

pub mod listing;
pub mod names;
pub mod service;
pub mod sorting;

#[cfg(test)]
mod test_support;

pub use errors::{GatewayError, GatewayResult, Resource, ValidationError};
pub use listing::{list_repository_summaries, RepositoryBrief, RepositorySummary};
pub use names::{is_valid_account_name, is_valid_repository_name, AccountName, RepositoryName};
pub use service::{EnrichedAccount, GatewayService};
pub use sorting::{sort_repositories, SortCriterion, SortDirection};
