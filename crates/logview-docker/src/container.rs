//! Docker-backed log source.

use async_trait::async_trait;
use bollard::Docker;
use bollard::errors::Error as BollardError;
use logview_core::{Error, Result};

use crate::LogSource;
use crate::logs::read_tail;

/// Reads container logs from the local Docker daemon.
///
/// The underlying client is cheap to clone and safe to share across requests.
#[derive(Debug, Clone)]
pub struct DockerLogSource {
    docker: Docker,
}

impl DockerLogSource {
    /// Connect using the local defaults (`DOCKER_HOST` or the platform socket).
    pub fn new() -> Result<Self> {
        let docker =
            Docker::connect_with_local_defaults().map_err(|e| Error::Docker(e.to_string()))?;
        Ok(Self { docker })
    }

    /// Connect with a custom socket path.
    pub fn with_socket(socket_path: &str) -> Result<Self> {
        let docker = Docker::connect_with_socket(socket_path, 120, bollard::API_DEFAULT_VERSION)
            .map_err(|e| Error::Docker(e.to_string()))?;
        Ok(Self { docker })
    }

    /// Connect to `socket_path` if given, otherwise use the local defaults.
    pub fn connect(socket_path: Option<&str>) -> Result<Self> {
        match socket_path {
            Some(path) => Self::with_socket(path),
            None => Self::new(),
        }
    }

    /// Check if Docker is available.
    pub async fn ping(&self) -> Result<()> {
        self.docker
            .ping()
            .await
            .map_err(|e| Error::Docker(e.to_string()))?;
        Ok(())
    }
}

#[async_trait]
impl LogSource for DockerLogSource {
    async fn lookup(&self, name: &str) -> Result<String> {
        let details = self
            .docker
            .inspect_container(name, None)
            .await
            .map_err(|e| lookup_error(name, e))?;

        Ok(details.id.unwrap_or_else(|| name.to_string()))
    }

    async fn tail(&self, id: &str, limit: i64) -> Result<Vec<u8>> {
        read_tail(&self.docker, id, limit).await
    }
}

/// Map an inspect failure, separating a missing container from everything else.
fn lookup_error(name: &str, err: BollardError) -> Error {
    match err {
        BollardError::DockerResponseServerError {
            status_code: 404, ..
        } => Error::ContainerNotFound(name.to_string()),
        other => Error::Docker(other.to_string()),
    }
}
