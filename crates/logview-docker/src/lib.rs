//! Docker access for logview.
//!
//! This crate looks containers up by name, reads the tail of their logs
//! and normalizes the result into displayable lines.

mod container;
mod fetcher;
mod logs;
mod source;

pub use container::DockerLogSource;
pub use fetcher::LogFetcher;
pub use source::LogSource;
