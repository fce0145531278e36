//! reeldb - A read-only movie ratings catalog served over HTTP
//!
//! The four MovieLens tables (movies, ratings, tags, links) are loaded once
//! from CSV at startup and never modified. Requests filter and paginate
//! them in memory.

pub mod cli;
pub mod dataset;
pub mod http_server;
pub mod query;
pub mod rest_api;
