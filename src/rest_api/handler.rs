//! # REST API Handler
//!
//! Translates request parameters into query-engine calls and shapes the
//! results. Every method is synchronous and read-only; the HTTP binding in
//! `server` is the only place that turns errors into status codes.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::dataset::{Cell, Dataset, Link, Movie, Rating, Record, Table, TableName, Tag};
use crate::query::{filter_by_key, paginate, FilterSet};

use super::errors::{RestError, RestResult};
use super::params::{parse_movie_search, parse_page_spec};
use super::response::{HealthResponse, ListResponse};

/// Handler for the catalog endpoints
#[derive(Debug, Clone)]
pub struct CatalogHandler {
    dataset: Arc<Dataset>,
    max_per_page: Option<usize>,
}

impl CatalogHandler {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self {
            dataset,
            max_per_page: None,
        }
    }

    /// Reject page sizes above `max`
    pub fn with_max_per_page(mut self, max: Option<usize>) -> Self {
        self.max_per_page = max;
        self
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// `GET /movies`, optionally filtered by `title` and `genre`
    pub fn list_movies(&self, params: &HashMap<String, String>) -> RestResult<ListResponse<&Movie>> {
        let filters = parse_movie_search(params);
        self.list(self.dataset.movies(), &filters, params)
    }

    /// `GET /movies/{movieId}`
    pub fn get_movie(&self, movie_id: i64) -> RestResult<&Movie> {
        first(self.by_key(self.dataset.movies(), movie_id)).ok_or_else(|| {
            key_miss(TableName::Movies, movie_id, format!("Movie with ID {} not found", movie_id))
        })
    }

    /// `GET /ratings`
    pub fn list_ratings(&self, params: &HashMap<String, String>) -> RestResult<ListResponse<&Rating>> {
        self.list(self.dataset.ratings(), &FilterSet::new(), params)
    }

    /// `GET /ratings/{movieId}`
    pub fn ratings_for_movie(&self, movie_id: i64) -> RestResult<Vec<&Rating>> {
        non_empty(self.by_key(self.dataset.ratings(), movie_id)).ok_or_else(|| {
            key_miss(
                TableName::Ratings,
                movie_id,
                format!("Ratings for movie ID {} not found", movie_id),
            )
        })
    }

    /// `GET /tags`
    pub fn list_tags(&self, params: &HashMap<String, String>) -> RestResult<ListResponse<&Tag>> {
        self.list(self.dataset.tags(), &FilterSet::new(), params)
    }

    /// `GET /tags/{movieId}`
    pub fn tags_for_movie(&self, movie_id: i64) -> RestResult<Vec<&Tag>> {
        non_empty(self.by_key(self.dataset.tags(), movie_id)).ok_or_else(|| {
            key_miss(
                TableName::Tags,
                movie_id,
                format!("Tags for movie ID {} not found", movie_id),
            )
        })
    }

    /// `GET /links`
    pub fn list_links(&self, params: &HashMap<String, String>) -> RestResult<ListResponse<&Link>> {
        self.list(self.dataset.links(), &FilterSet::new(), params)
    }

    /// `GET /links/{movieId}`
    pub fn get_link(&self, movie_id: i64) -> RestResult<&Link> {
        first(self.by_key(self.dataset.links(), movie_id)).ok_or_else(|| {
            key_miss(
                TableName::Links,
                movie_id,
                format!("Link for movie ID {} not found", movie_id),
            )
        })
    }

    /// `GET /health`
    pub fn health(&self) -> HealthResponse {
        HealthResponse::ok(self.dataset.summary())
    }

    fn list<'a, R: Record>(
        &self,
        table: &'a Table<R>,
        filters: &FilterSet,
        params: &HashMap<String, String>,
    ) -> RestResult<ListResponse<&'a R>> {
        let spec = parse_page_spec(params, self.max_per_page)?;
        let rows = filters.apply(table.rows());
        let result = paginate(&rows, &spec);

        debug!(
            table = %table.name(),
            filters = filters.filters.len(),
            page = spec.page(),
            per_page = spec.per_page(),
            matched = result.total_items,
            "list query"
        );

        Ok(ListResponse::new(table.name(), result))
    }

    fn by_key<'a, R: Record>(&self, table: &'a Table<R>, movie_id: i64) -> Vec<&'a R> {
        let rows = filter_by_key(table.rows(), table.key_column(), &Cell::Int(movie_id));
        debug!(table = %table.name(), movie_id, matched = rows.len(), "key lookup");
        rows
    }
}

fn key_miss(table: TableName, movie_id: i64, message: String) -> RestError {
    warn!(table = %table, movie_id, "no rows for key");
    RestError::not_found(message)
}

fn first<T>(rows: Vec<T>) -> Option<T> {
    rows.into_iter().next()
}

fn non_empty<T>(rows: Vec<T>) -> Option<Vec<T>> {
    if rows.is_empty() {
        None
    } else {
        Some(rows)
    }
}
