//! Container log source abstraction.

use async_trait::async_trait;
use logview_core::Result;

/// A container runtime able to return the tail of a container's output.
///
/// Implementations must be safe to share between concurrent requests.
#[async_trait]
pub trait LogSource: Send + Sync {
    /// Resolve a container name to the identifier used by [`LogSource::tail`].
    ///
    /// Returns [`logview_core::Error::ContainerNotFound`] when no such
    /// container exists.
    async fn lookup(&self, name: &str) -> Result<String>;

    /// Read up to the last `limit` lines of combined stdout and stderr.
    ///
    /// A negative `limit` asks for the whole log.
    async fn tail(&self, id: &str, limit: i64) -> Result<Vec<u8>>;
}
