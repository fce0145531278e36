//! # HTTP Server Module
//!
//! Serves the catalog REST API over HTTP.
//!
//! # Endpoints
//!
//! - `/health` - Health check with table row counts
//! - `/movies`, `/movies/{movieId}`
//! - `/ratings`, `/ratings/{movieId}`
//! - `/tags`, `/tags/{movieId}`
//! - `/links`, `/links/{movieId}`

pub mod config;
pub mod server;

pub use config::HttpServerConfig;
pub use server::HttpServer;
