//! Serve command implementation
//!
//! This module implements the `mergington serve` command: it seeds the
//! activity store and serves the HTTP API until Ctrl+C or SIGTERM.

use anyhow::{Context, Result};
use mergington_adapters::{HttpServer, ServerConfig};
use mergington_store::ActivityStore;
use std::net::SocketAddr;
use std::path::Path;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Default tracing directive when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "mergington=info,tower_http=info";

/// Arguments for the serve command
pub struct ServeArgs {
    /// Interface to bind
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Directory served under /static
    pub static_dir: String,
    /// Disable the /static mount
    pub no_static: bool,
    /// Allow cross-origin requests
    pub cors: bool,
    /// Tracing filter directive
    pub log_level: Option<String>,
}

/// Execute the serve command
pub async fn execute_serve_command(args: ServeArgs) -> Result<()> {
    init_tracing(args.log_level.as_deref())?;

    let addr = parse_listen_address(&args.host, args.port)?;

    let mut builder = ServerConfig::builder().addr(addr).cors(args.cors);
    if args.no_static {
        builder = builder.no_static();
    } else {
        if let Err(e) = validate_static_dir(&args.static_dir) {
            warn!("{:#}", e);
        }
        builder = builder.static_dir(&args.static_dir);
    }
    let config = builder.build();

    let store = ActivityStore::seeded();
    info!(activities = store.len().await, "Activity store ready");

    let server = HttpServer::new(config, store);

    println!("🏫 Starting Mergington activities API...");
    println!("🔌 Listening on: http://{}", server.config().addr);
    match &server.config().static_dir {
        Some(dir) => println!("📁 Static files: {}", dir.display()),
        None => println!("📁 Static files: disabled"),
    }
    println!();

    println!("🔄 Server running... Press Ctrl+C to shutdown");
    server
        .run(wait_for_shutdown())
        .await
        .context("Failed to run HTTP server")?;

    println!("✅ Server shutdown complete");
    Ok(())
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over `--log-level`; with neither set the
/// [`DEFAULT_LOG_FILTER`] applies.
fn init_tracing(log_level: Option<&str>) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(log_level.unwrap_or(DEFAULT_LOG_FILTER))
            .context("Invalid log level directive")?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {}", e))
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn wait_for_shutdown() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }

    println!("\n🛑 Shutting down server...");
}

/// Parse the listen address with a helpful error message
pub fn parse_listen_address(host: &str, port: u16) -> Result<SocketAddr> {
    let candidate = if host.contains(':') && !host.starts_with('[') {
        format!("[{}]:{}", host, port)
    } else {
        format!("{}:{}", host, port)
    };

    candidate.parse().with_context(|| {
        format!(
            "Invalid listen address '{}'. Expected an IP address (e.g., 127.0.0.1)",
            host
        )
    })
}

/// Check that the static directory exists
pub fn validate_static_dir(dir: &str) -> Result<()> {
    let path = Path::new(dir);
    if !path.is_dir() {
        anyhow::bail!(
            "Static directory {} not found; /static requests will return 404",
            dir
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_listen_address() {
        assert_eq!(
            parse_listen_address("127.0.0.1", 8000).unwrap(),
            "127.0.0.1:8000".parse::<SocketAddr>().unwrap()
        );
        assert!(parse_listen_address("0.0.0.0", 80).is_ok());
        assert!(parse_listen_address("::1", 8000).unwrap().is_ipv6());

        assert!(parse_listen_address("localhost", 8000).is_err());
        assert!(parse_listen_address("not an address", 8000).is_err());
    }

    #[test]
    fn test_validate_static_dir() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().to_string_lossy().to_string();
        assert!(validate_static_dir(&dir).is_ok());

        let missing = temp_dir.path().join("missing").to_string_lossy().to_string();
        assert!(validate_static_dir(&missing).is_err());
    }

    #[test]
    fn test_default_log_filter_parses() {
        assert!(EnvFilter::try_new(DEFAULT_LOG_FILTER).is_ok());
    }
}
