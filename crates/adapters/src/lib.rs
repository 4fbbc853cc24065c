//! HTTP adapter for the Mergington activities API
//!
//! This crate exposes the activity store over HTTP with axum: the three
//! roster endpoints, a redirect to the bundled front end and the static
//! file mount.

pub mod error;
pub mod http_server;
pub mod router;

pub use error::ApiError;
pub use http_server::{HttpServer, ServerConfig, ServerConfigBuilder};
pub use router::{api_routes, build_router};
