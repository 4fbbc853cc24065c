//! HTTP server for the activities API.
//!
//! [`HttpServer`] owns the listen configuration and the shared
//! [`ActivityStore`], builds the router and serves it until a shutdown
//! signal arrives.

use std::future::Future;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use axum::Router;
use mergington_store::ActivityStore;
use tokio::net::TcpListener;
use tracing::info;

use crate::router::build_router;

/// Default listen port, bound on the loopback interface.
pub const DEFAULT_PORT: u16 = 8000;

/// Default directory served under `/static`.
pub const DEFAULT_STATIC_DIR: &str = "static";

/// Configuration for the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listen address
    pub addr: SocketAddr,
    /// Directory served under `/static`; `None` disables static files
    pub static_dir: Option<PathBuf>,
    /// Allow cross-origin requests from any origin
    pub cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl ServerConfig {
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }
}

/// Builder for [`ServerConfig`].
#[derive(Debug, Default)]
pub struct ServerConfigBuilder {
    addr: Option<SocketAddr>,
    static_dir: Option<Option<PathBuf>>,
    cors: Option<bool>,
}

impl ServerConfigBuilder {
    pub fn addr(mut self, addr: SocketAddr) -> Self {
        self.addr = Some(addr);
        self
    }

    pub fn static_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.static_dir = Some(Some(dir.as_ref().to_path_buf()));
        self
    }

    /// Do not serve `/static` at all.
    pub fn no_static(mut self) -> Self {
        self.static_dir = Some(None);
        self
    }

    pub fn cors(mut self, enabled: bool) -> Self {
        self.cors = Some(enabled);
        self
    }

    pub fn build(self) -> ServerConfig {
        ServerConfig {
            addr: self
                .addr
                .unwrap_or_else(|| SocketAddr::from(([127, 0, 0, 1], DEFAULT_PORT))),
            static_dir: self
                .static_dir
                .unwrap_or_else(|| Some(PathBuf::from(DEFAULT_STATIC_DIR))),
            cors: self.cors.unwrap_or(false),
        }
    }
}

/// The activities HTTP server.
pub struct HttpServer {
    config: ServerConfig,
    store: ActivityStore,
}

impl HttpServer {
    /// Creates a new [`HttpServer`] serving `store`.
    pub fn new(config: ServerConfig, store: ActivityStore) -> Self {
        Self { config, store }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Handle to the store the server mutates.
    pub fn store(&self) -> &ActivityStore {
        &self.store
    }

    pub fn router(&self) -> Router {
        build_router(self.store.clone(), &self.config)
    }

    /// Bind the configured address and serve until `shutdown` resolves.
    pub async fn run<F>(self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let listener = TcpListener::bind(self.config.addr)
            .await
            .with_context(|| format!("Failed to bind {}", self.config.addr))?;

        self.serve(listener, shutdown).await
    }

    /// Serve on an already bound listener until `shutdown` resolves.
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let local_addr = listener
            .local_addr()
            .context("Failed to read listener address")?;
        info!(addr = %local_addr, "Activities API listening");

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await
            .context("HTTP server error")?;

        info!("HTTP server shutdown complete");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpStream;
    use tokio::sync::oneshot;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.addr, "127.0.0.1:8000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.static_dir, Some(PathBuf::from(DEFAULT_STATIC_DIR)));
        assert!(!config.cors);
    }

    #[test]
    fn test_builder_overrides() {
        let addr: SocketAddr = "0.0.0.0:9100".parse().unwrap();
        let config = ServerConfig::builder()
            .addr(addr)
            .no_static()
            .cors(true)
            .build();

        assert_eq!(config.addr, addr);
        assert!(config.static_dir.is_none());
        assert!(config.cors);
    }

    #[tokio::test]
    async fn test_serves_over_tcp_and_shuts_down() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let config = ServerConfig::builder().addr(addr).no_static().build();
        let server = HttpServer::new(config, ActivityStore::seeded());
        let store = server.store().clone();

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let handle = tokio::spawn(server.serve(listener, async move {
            let _ = shutdown_rx.await;
        }));

        let mut stream = TcpStream::connect(addr).await.unwrap();
        stream
            .write_all(
                b"POST /activities/Soccer/signup?email=wire@mergington.edu HTTP/1.1\r\n\
                  Host: localhost\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
            )
            .await
            .unwrap();

        let mut response = String::new();
        stream.read_to_string(&mut response).await.unwrap();
        assert!(response.starts_with("HTTP/1.1 200"), "{}", response);
        assert!(response.contains("Signed up wire@mergington.edu for Soccer"));

        let soccer = store.get("Soccer").await.unwrap();
        assert!(soccer.has_participant("wire@mergington.edu"));

        shutdown_tx.send(()).unwrap();
        handle.await.unwrap().unwrap();
    }
}
