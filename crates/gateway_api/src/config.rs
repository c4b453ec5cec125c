//! Environment configuration
//!
//! The gateway is configured entirely through environment variables,
//! optionally seeded from a `.env` file by the binary:
//!
//! - `PORT`: Port to listen on (default: 3001)
//! - `HOST`: Address to bind to (default: 0.0.0.0)
//! - `GITHUB_TOKEN`: Upstream access token (default: anonymous access)
//! - `GITHUB_API_URL`: Upstream base URL (default: the public GitHub API)
//! - `PUBLIC_DIR`: Directory holding the documentation page (default: public)
//!
//! Variables that are set but empty are treated as unset.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use secrecy::SecretString;
use thiserror::Error;
use url::Url;

use crate::DEFAULT_PORT;

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

pub const PORT_VAR: &str = "PORT";
pub const HOST_VAR: &str = "HOST";
pub const GITHUB_TOKEN_VAR: &str = "GITHUB_TOKEN";
pub const GITHUB_API_URL_VAR: &str = "GITHUB_API_URL";
pub const PUBLIC_DIR_VAR: &str = "PUBLIC_DIR";

/// Directory served when `PUBLIC_DIR` is not set
pub const DEFAULT_PUBLIC_DIR: &str = "public";

/// Errors raised while reading the configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value '{value}' for {variable}: {reason}")]
    InvalidValue {
        variable: String,
        value: String,
        reason: String,
    },
}

impl ConfigError {
    fn invalid(variable: &str, value: &str, reason: impl ToString) -> Self {
        ConfigError::InvalidValue {
            variable: variable.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Complete runtime configuration of the gateway.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Address the HTTP listener binds to
    pub listen_addr: SocketAddr,

    /// Directory holding the documentation page and other static files
    pub public_dir: PathBuf,

    /// Token sent upstream; `None` means anonymous access
    pub github_token: Option<SecretString>,

    /// Upstream base URL; `None` means the client default
    pub github_api_url: Option<Url>,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT)),
            public_dir: PathBuf::from(DEFAULT_PUBLIC_DIR),
            github_token: None,
            github_api_url: None,
        }
    }
}

impl GatewayConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read the configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        let port = match lookup(PORT_VAR) {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|e| ConfigError::invalid(PORT_VAR, &value, e))?,
            None => defaults.listen_addr.port(),
        };

        let host = match lookup(HOST_VAR) {
            Some(value) => value
                .trim()
                .parse::<IpAddr>()
                .map_err(|e| ConfigError::invalid(HOST_VAR, &value, e))?,
            None => defaults.listen_addr.ip(),
        };

        let public_dir = lookup(PUBLIC_DIR_VAR)
            .map(PathBuf::from)
            .unwrap_or(defaults.public_dir);

        let github_token = lookup(GITHUB_TOKEN_VAR).map(SecretString::from);

        let github_api_url = match lookup(GITHUB_API_URL_VAR) {
            Some(value) => {
                let url = Url::parse(&value)
                    .map_err(|e| ConfigError::invalid(GITHUB_API_URL_VAR, &value, e))?;
                if !matches!(url.scheme(), "http" | "https") {
                    return Err(ConfigError::invalid(
                        GITHUB_API_URL_VAR,
                        &value,
                        "expected an http or https URL",
                    ));
                }
                Some(url)
            }
            None => None,
        };

        Ok(Self {
            listen_addr: SocketAddr::new(host, port),
            public_dir,
            github_token,
            github_api_url,
        })
    }

    /// Upstream base URI in the form the client builder expects.
    pub fn github_base_uri(&self) -> Option<String> {
        self.github_api_url
            .as_ref()
            .map(|url| url.as_str().trim_end_matches('/').to_string())
    }
}
