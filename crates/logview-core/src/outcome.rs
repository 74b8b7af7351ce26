//! Typed result of a log fetch.

use crate::Error;

/// Outcome of fetching the tail of a container's logs.
///
/// Failures are kept as data so callers never need their own error handling;
/// [`FetchOutcome::into_lines`] flattens every variant into displayable lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Log lines, oldest first. Never empty.
    Lines(Vec<String>),
    /// The container exists but produced no output in the requested window.
    Empty(String),
    /// No container with this name exists.
    NotFound(String),
    /// Any other failure, with its description.
    Failed(String),
}

impl FetchOutcome {
    /// Build an outcome from decoded log lines of `container`.
    pub fn from_lines(container: &str, lines: Vec<String>) -> Self {
        if lines.is_empty() {
            Self::Empty(container.to_string())
        } else {
            Self::Lines(lines)
        }
    }

    /// Build an outcome from an error raised while fetching.
    pub fn from_error(err: Error) -> Self {
        match err {
            Error::ContainerNotFound(name) => Self::NotFound(name),
            Error::Docker(msg) | Error::Decode(msg) => Self::Failed(msg),
            other => Self::Failed(other.to_string()),
        }
    }

    /// Flatten into the lines shown to clients.
    ///
    /// Every non-content variant becomes exactly one marker line.
    pub fn into_lines(self) -> Vec<String> {
        match self {
            Self::Lines(lines) => lines,
            Self::Empty(name) => vec![format!("ℹ️ No log output from container '{name}'.")],
            Self::NotFound(name) => vec![format!("❌ Container '{name}' not found.")],
            Self::Failed(msg) => vec![format!("⚠️ Error fetching logs: {msg}")],
        }
    }
}

/// Split raw log text into lines after dropping trailing whitespace.
///
/// `\r\n`, `\n` and a lone `\r` all end a line, so carriage-return progress
/// updates come out as separate lines.
pub fn split_lines(text: &str) -> Vec<String> {
    let text = text.trim_end();
    if text.is_empty() {
        return Vec::new();
    }

    text.split('\n')
        .flat_map(|line| line.strip_suffix('\r').unwrap_or(line).split('\r'))
        .map(str::to_string)
        .collect()
}
