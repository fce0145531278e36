//! # Response Formatting
//!
//! Standard response types for the REST API.

use std::collections::BTreeMap;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::dataset::TableName;
use crate::query::PageResult;

/// List response with pagination.
///
/// Serializes as `{page, per_page, total_pages, total_items, <table>: [...]}`,
/// with the items keyed by the table name.
#[derive(Debug, Clone)]
pub struct ListResponse<T> {
    pub table: TableName,
    pub result: PageResult<T>,
}

impl<T> ListResponse<T> {
    pub fn new(table: TableName, result: PageResult<T>) -> Self {
        Self { table, result }
    }
}

impl<T: Serialize> Serialize for ListResponse<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(5))?;
        map.serialize_entry("page", &self.result.page)?;
        map.serialize_entry("per_page", &self.result.per_page)?;
        map.serialize_entry("total_pages", &self.result.total_pages)?;
        map.serialize_entry("total_items", &self.result.total_items)?;
        map.serialize_entry(self.table.as_str(), &self.result.items)?;
        map.end()
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub tables: BTreeMap<TableName, usize>,
}

impl HealthResponse {
    pub fn ok(tables: BTreeMap<TableName, usize>) -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            tables,
        }
    }
}
