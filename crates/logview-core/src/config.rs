//! Configuration management.

use std::net::SocketAddr;

use crate::{Error, Result};

/// Container watched when `CONTAINER_NAME` is not set.
pub const DEFAULT_CONTAINER_NAME: &str = "centron-bot";

/// Address the server listens on by default.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";

/// Number of lines shown when the request carries no usable `limit`.
pub const DEFAULT_LIMIT: i64 = 50;

/// Application configuration.
///
/// Resolved once at startup and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Name of the container whose logs are served.
    pub container_name: String,
    /// Address the HTTP server binds to.
    pub bind_addr: String,
    /// Docker socket path.
    pub docker_socket: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            container_name: DEFAULT_CONTAINER_NAME.to_string(),
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            docker_socket: None,
        }
    }
}

impl Config {
    /// Create a configuration for the given container with default binding.
    pub fn new(container_name: impl Into<String>) -> Self {
        Self {
            container_name: container_name.into(),
            ..Self::default()
        }
    }

    /// Check the configuration and return the parsed bind address.
    pub fn validate(&self) -> Result<SocketAddr> {
        if self.container_name.trim().is_empty() {
            return Err(Error::Config("container name must not be empty".into()));
        }

        if self
            .docker_socket
            .as_deref()
            .is_some_and(|socket| socket.trim().is_empty())
        {
            return Err(Error::Config("docker socket path must not be empty".into()));
        }

        self.bind_addr
            .parse()
            .map_err(|e| Error::Config(format!("invalid bind address {}: {}", self.bind_addr, e)))
    }
}
