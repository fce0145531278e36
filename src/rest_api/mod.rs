//! # REST API Module
//!
//! Read-only HTTP endpoints over the catalog tables, with pagination on
//! every list endpoint and title/genre search on movies.

pub mod errors;
pub mod handler;
pub mod params;
pub mod response;
pub mod server;

pub use errors::{ErrorResponse, RestError, RestResult};
pub use handler::CatalogHandler;
pub use response::{HealthResponse, ListResponse};
pub use server::RestServer;
