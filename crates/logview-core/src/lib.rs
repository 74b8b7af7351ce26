//! Core types and configuration for logview.
//!
//! This crate provides the configuration, error types and the fetch outcome
//! shared across the logview workspace.

mod config;
mod error;
mod outcome;

pub use config::{Config, DEFAULT_BIND_ADDR, DEFAULT_CONTAINER_NAME, DEFAULT_LIMIT};
pub use error::{Error, Result};
pub use outcome::{FetchOutcome, split_lines};
