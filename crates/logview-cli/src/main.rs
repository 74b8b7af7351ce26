use anyhow::{Context, Result};
use clap::Parser;
use logview_core::{Config, DEFAULT_BIND_ADDR, DEFAULT_CONTAINER_NAME};
use logview_docker::DockerLogSource;
use logview_web::AppState;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(name = "logview")]
#[command(author, version, about = "Serve the recent logs of a Docker container over HTTP")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Container whose logs are served
    #[arg(long = "container", env = "CONTAINER_NAME", default_value = DEFAULT_CONTAINER_NAME)]
    container_name: String,

    /// Address to listen on
    #[arg(long = "bind", env = "LOGVIEW_BIND", default_value = DEFAULT_BIND_ADDR)]
    bind_addr: String,

    /// Docker socket path (defaults to DOCKER_HOST or the platform socket)
    #[arg(long, env = "DOCKER_SOCKET")]
    docker_socket: Option<String>,
}

impl Cli {
    fn config(&self) -> Config {
        Config {
            container_name: self.container_name.clone(),
            bind_addr: self.bind_addr.clone(),
            docker_socket: self.docker_socket.clone(),
        }
    }
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let config = cli.config();
    let addr = config.validate()?;

    let source = DockerLogSource::connect(config.docker_socket.as_deref())
        .context("failed to create Docker client")?;
    if let Err(e) = source.ping().await {
        tracing::warn!("Docker is not reachable yet: {}", e);
    }

    let state = AppState::new(&config, source)?;
    let app = logview_web::create_router(state);

    tracing::info!(
        "Serving logs of container {} on http://{}/logs/",
        config.container_name,
        addr
    );

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind to {addr}"))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}
