//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;

use anyhow::Result;
use async_trait::async_trait;
use logview_core::{Config, Error};
use logview_docker::LogSource;
use logview_web::AppState;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// In-memory container runtime.
#[derive(Default)]
pub struct FakeRuntime {
    containers: HashMap<String, Vec<String>>,
    failure: Option<String>,
}

impl FakeRuntime {
    /// Runtime holding one container with the given log lines.
    pub fn with_container(name: &str, lines: &[&str]) -> Self {
        let mut runtime = Self::default();
        runtime.containers.insert(
            name.to_string(),
            lines.iter().map(|line| (*line).to_string()).collect(),
        );
        runtime
    }

    /// Runtime whose every call fails with `message`.
    pub fn unreachable(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::default()
        }
    }
}

#[async_trait]
impl LogSource for FakeRuntime {
    async fn lookup(&self, name: &str) -> logview_core::Result<String> {
        if let Some(message) = &self.failure {
            return Err(Error::Docker(message.clone()));
        }
        if self.containers.contains_key(name) {
            Ok(name.to_string())
        } else {
            Err(Error::ContainerNotFound(name.to_string()))
        }
    }

    async fn tail(&self, id: &str, limit: i64) -> logview_core::Result<Vec<u8>> {
        let lines = self
            .containers
            .get(id)
            .ok_or_else(|| Error::ContainerNotFound(id.to_string()))?;
        let keep = usize::try_from(limit).map_or(lines.len(), |n| n.min(lines.len()));
        let mut out = String::new();
        for line in &lines[lines.len() - keep..] {
            out.push_str(line);
            out.push('\n');
        }
        Ok(out.into_bytes())
    }
}

/// Application state watching `container` on `runtime`.
pub fn state(container: &str, runtime: FakeRuntime) -> Result<AppState> {
    Ok(AppState::new(&Config::new(container), runtime)?)
}

/// Serve the router on an ephemeral local port.
pub async fn spawn_server(state: AppState) -> Result<SocketAddr> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let app = logview_web::create_router(state);

    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    Ok(addr)
}

/// Minimal HTTP response.
pub struct RawResponse {
    pub status: u16,
    pub headers: String,
    pub body: String,
}

/// Issue a `GET` with `Connection: close` and read the whole response.
pub async fn get(addr: SocketAddr, path: &str) -> Result<RawResponse> {
    let mut stream = TcpStream::connect(addr).await?;
    let request = format!("GET {path} HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\n\r\n");
    stream.write_all(request.as_bytes()).await?;

    let mut raw = Vec::new();
    stream.read_to_end(&mut raw).await?;
    let text = String::from_utf8(raw)?;

    let (head, body) = text
        .split_once("\r\n\r\n")
        .ok_or_else(|| anyhow::anyhow!("malformed response: {text}"))?;
    let status = head
        .split_whitespace()
        .nth(1)
        .ok_or_else(|| anyhow::anyhow!("missing status line"))?
        .parse()?;

    Ok(RawResponse {
        status,
        headers: head.to_string(),
        body: body.to_string(),
    })
}
