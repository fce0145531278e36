//! # REST API HTTP Server
//!
//! Axum routes for the catalog endpoints.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{rejection::PathRejection, Path, Query, State},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

use super::errors::{RestError, RestResult};
use super::handler::CatalogHandler;
use super::params::parse_movie_id;

/// REST API server state
pub struct RestServer {
    handler: Arc<CatalogHandler>,
}

impl RestServer {
    pub fn new(handler: CatalogHandler) -> Self {
        Self {
            handler: Arc::new(handler),
        }
    }

    /// Build the Axum router
    pub fn router(self) -> Router {
        Router::new()
            .route("/health", get(health_handler))
            .route("/movies", get(list_movies_handler))
            .route("/movies/:movie_id", get(get_movie_handler))
            .route("/ratings", get(list_ratings_handler))
            .route("/ratings/:movie_id", get(ratings_for_movie_handler))
            .route("/tags", get(list_tags_handler))
            .route("/tags/:movie_id", get(tags_for_movie_handler))
            .route("/links", get(list_links_handler))
            .route("/links/:movie_id", get(get_link_handler))
            .fallback(fallback_handler)
            .with_state(self.handler)
    }
}

/// Shared state type
type ServerState = Arc<CatalogHandler>;

/// Query string as raw key/value pairs
type Params = Query<HashMap<String, String>>;

/// `{movieId}` segment. A segment axum cannot decode is a 404 like any
/// other non-integer id.
type MovieIdSegment = Result<Path<String>, PathRejection>;

fn segment_movie_id(segment: MovieIdSegment) -> RestResult<i64> {
    let Path(raw) = segment.map_err(|_| RestError::RouteNotFound)?;
    parse_movie_id(&raw)
}

async fn health_handler(State(handler): State<ServerState>) -> Response {
    Json(handler.health()).into_response()
}

async fn list_movies_handler(
    State(handler): State<ServerState>,
    Query(query): Params,
) -> RestResult<Response> {
    Ok(Json(handler.list_movies(&query)?).into_response())
}

async fn get_movie_handler(
    State(handler): State<ServerState>,
    segment: MovieIdSegment,
) -> RestResult<Response> {
    let movie_id = segment_movie_id(segment)?;
    Ok(Json(handler.get_movie(movie_id)?).into_response())
}

async fn list_ratings_handler(
    State(handler): State<ServerState>,
    Query(query): Params,
) -> RestResult<Response> {
    Ok(Json(handler.list_ratings(&query)?).into_response())
}

async fn ratings_for_movie_handler(
    State(handler): State<ServerState>,
    segment: MovieIdSegment,
) -> RestResult<Response> {
    let movie_id = segment_movie_id(segment)?;
    Ok(Json(handler.ratings_for_movie(movie_id)?).into_response())
}

async fn list_tags_handler(
    State(handler): State<ServerState>,
    Query(query): Params,
) -> RestResult<Response> {
    Ok(Json(handler.list_tags(&query)?).into_response())
}

async fn tags_for_movie_handler(
    State(handler): State<ServerState>,
    segment: MovieIdSegment,
) -> RestResult<Response> {
    let movie_id = segment_movie_id(segment)?;
    Ok(Json(handler.tags_for_movie(movie_id)?).into_response())
}

async fn list_links_handler(
    State(handler): State<ServerState>,
    Query(query): Params,
) -> RestResult<Response> {
    Ok(Json(handler.list_links(&query)?).into_response())
}

async fn get_link_handler(
    State(handler): State<ServerState>,
    segment: MovieIdSegment,
) -> RestResult<Response> {
    let movie_id = segment_movie_id(segment)?;
    Ok(Json(handler.get_link(movie_id)?).into_response())
}

async fn fallback_handler() -> RestError {
    RestError::RouteNotFound
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{Dataset, Table};

    #[test]
    fn test_router_builds() {
        let dataset = Dataset::new(
            Table::from_rows(Vec::new()),
            Table::from_rows(Vec::new()),
            Table::from_rows(Vec::new()),
            Table::from_rows(Vec::new()),
        );
        let server = RestServer::new(CatalogHandler::new(Arc::new(dataset)));
        let _router = server.router();
    }
}
