//! HTTP surface for logview.
//!
//! Serves the log page and the JSON endpoint it polls.

pub mod handlers;
mod page;

use std::sync::Arc;

use axum::{
    Router,
    extract::Request,
    middleware::{self, Next},
    response::Response,
    routing::get,
};
use logview_core::{Config, Result};
use logview_docker::{LogFetcher, LogSource};
use tower_http::trace::TraceLayer;

pub use handlers::{LogsResponse, parse_limit};
pub use page::{PageRenderer, PageView};

/// Immutable state shared by every request.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Name of the watched container.
    pub container: Arc<str>,
    /// Reads logs from the container runtime.
    pub fetcher: LogFetcher,
    /// Compiled page template.
    pub page: Arc<PageRenderer>,
}

impl AppState {
    /// Build the state for `config`, reading logs from `source`.
    pub fn new(config: &Config, source: impl LogSource + 'static) -> Result<Self> {
        Ok(Self {
            container: Arc::from(config.container_name.as_str()),
            fetcher: LogFetcher::new(source),
            page: Arc::new(PageRenderer::new()?),
        })
    }
}

/// Create the router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/logs", get(handlers::redirect_to_page))
        .route("/logs/", get(handlers::logs_page))
        .route("/logs/api", get(handlers::logs_api))
        .with_state(state)
        .layer(middleware::from_fn(log_request_path))
        .layer(TraceLayer::new_for_http())
}

async fn log_request_path(request: Request, next: Next) -> Response {
    tracing::info!("Request path: {}", request.uri().path());
    next.run(request).await
}
