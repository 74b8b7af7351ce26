//! Log fetching with failures folded into the result.

use std::sync::Arc;

use logview_core::{FetchOutcome, Result, split_lines};

use crate::LogSource;

/// Turns a container name and a line limit into displayable log lines.
///
/// Never returns an error: a missing container or any runtime failure comes
/// back as a single descriptive line.
#[derive(Clone)]
pub struct LogFetcher {
    source: Arc<dyn LogSource>,
}

impl LogFetcher {
    /// Create a fetcher reading from `source`.
    pub fn new(source: impl LogSource + 'static) -> Self {
        Self {
            source: Arc::new(source),
        }
    }

    /// Fetch the last `limit` lines of `container`, flattened for display.
    pub async fn fetch(&self, container: &str, limit: i64) -> Vec<String> {
        self.outcome(container, limit).await.into_lines()
    }

    /// Fetch the last `limit` lines of `container` as a typed outcome.
    pub async fn outcome(&self, container: &str, limit: i64) -> FetchOutcome {
        tracing::debug!("Fetching last {} lines of {}", limit, container);

        match self.read_lines(container, limit).await {
            Ok(lines) => FetchOutcome::from_lines(container, lines),
            Err(e) => {
                tracing::warn!("Failed to fetch logs for {}: {}", container, e);
                FetchOutcome::from_error(e)
            }
        }
    }

    async fn read_lines(&self, container: &str, limit: i64) -> Result<Vec<String>> {
        let id = self.source.lookup(container).await?;
        let raw = self.source.tail(&id, limit).await?;
        let text = String::from_utf8(raw)?;
        Ok(split_lines(&text))
    }
}

impl std::fmt::Debug for LogFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogFetcher").finish_non_exhaustive()
    }
}
