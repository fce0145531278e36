//! Typed records for the four catalog tables
//!
//! Each table has its own record type with named, typed fields. The
//! generic query engine reaches columns through [`Record::cell`], which
//! exposes any column by its source name as a [`Cell`].

use std::fmt;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::errors::DatasetError;

/// Key column shared by every table
pub const MOVIE_ID: &str = "movieId";

/// The four fixed tables of the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TableName {
    Movies,
    Ratings,
    Tags,
    Links,
}

impl TableName {
    /// All tables, in load order
    pub const ALL: [TableName; 4] = [
        TableName::Movies,
        TableName::Ratings,
        TableName::Tags,
        TableName::Links,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TableName::Movies => "movies",
            TableName::Ratings => "ratings",
            TableName::Tags => "tags",
            TableName::Links => "links",
        }
    }

    /// Source file name inside the data directory
    pub fn file_name(&self) -> &'static str {
        match self {
            TableName::Movies => "movies.csv",
            TableName::Ratings => "ratings.csv",
            TableName::Tags => "tags.csv",
            TableName::Links => "links.csv",
        }
    }

    /// Column used for exact-match lookups
    pub fn key_column(&self) -> &'static str {
        MOVIE_ID
    }
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TableName {
    type Err = DatasetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "movies" => Ok(TableName::Movies),
            "ratings" => Ok(TableName::Ratings),
            "tags" => Ok(TableName::Tags),
            "links" => Ok(TableName::Links),
            other => Err(DatasetError::UnknownTable(other.to_string())),
        }
    }
}

/// A borrowed scalar view of one column value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cell<'a> {
    Int(i64),
    Float(f64),
    Text(&'a str),
    Null,
}

impl<'a> Cell<'a> {
    /// Typed equality used by key lookups.
    ///
    /// Integers compare as integers, integer against float compares
    /// numerically, text compares as text. Null never equals anything,
    /// including another null.
    pub fn key_eq(&self, other: &Cell<'_>) -> bool {
        match (self, other) {
            (Cell::Int(a), Cell::Int(b)) => a == b,
            (Cell::Float(a), Cell::Float(b)) => a == b,
            (Cell::Int(a), Cell::Float(b)) | (Cell::Float(b), Cell::Int(a)) => *a as f64 == *b,
            (Cell::Text(a), Cell::Text(b)) => a == b,
            _ => false,
        }
    }

    /// Case-insensitive containment against an already lowercased needle.
    ///
    /// Numeric cells are matched against their decimal rendering. Floats
    /// always keep a fractional part, so `4.0` renders as `"4.0"`.
    pub fn contains_lowercase(&self, needle: &str) -> bool {
        match self {
            Cell::Text(s) => s.to_lowercase().contains(needle),
            Cell::Int(n) => n.to_string().contains(needle),
            Cell::Float(f) => format!("{:?}", f).contains(needle),
            Cell::Null => false,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Cell::Null)
    }
}

impl From<i64> for Cell<'_> {
    fn from(v: i64) -> Self {
        Cell::Int(v)
    }
}

impl<'a> From<&'a str> for Cell<'a> {
    fn from(v: &'a str) -> Self {
        Cell::Text(v)
    }
}

fn opt_text(v: &Option<String>) -> Cell<'_> {
    v.as_deref().map_or(Cell::Null, Cell::Text)
}

fn opt_int(v: Option<i64>) -> Cell<'static> {
    v.map_or(Cell::Null, Cell::Int)
}

/// A typed row of one catalog table
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Table this record belongs to
    const TABLE: TableName;

    /// Columns the source header must provide
    const COLUMNS: &'static [&'static str];

    /// Value of the shared key column
    fn movie_id(&self) -> i64;

    /// Column value by source column name, `None` for unknown columns
    fn cell(&self, column: &str) -> Option<Cell<'_>>;
}

/// One row of `movies`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub movie_id: i64,
    pub title: String,
    pub genres: String,
}

impl Record for Movie {
    const TABLE: TableName = TableName::Movies;
    const COLUMNS: &'static [&'static str] = &["movieId", "title", "genres"];

    fn movie_id(&self) -> i64 {
        self.movie_id
    }

    fn cell(&self, column: &str) -> Option<Cell<'_>> {
        match column {
            "movieId" => Some(Cell::Int(self.movie_id)),
            "title" => Some(Cell::Text(&self.title)),
            "genres" => Some(Cell::Text(&self.genres)),
            _ => None,
        }
    }
}

/// One row of `ratings`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rating {
    pub user_id: i64,
    pub movie_id: i64,
    pub rating: f64,
    pub timestamp: i64,
}

impl Record for Rating {
    const TABLE: TableName = TableName::Ratings;
    const COLUMNS: &'static [&'static str] = &["userId", "movieId", "rating", "timestamp"];

    fn movie_id(&self) -> i64 {
        self.movie_id
    }

    fn cell(&self, column: &str) -> Option<Cell<'_>> {
        match column {
            "userId" => Some(Cell::Int(self.user_id)),
            "movieId" => Some(Cell::Int(self.movie_id)),
            "rating" => Some(Cell::Float(self.rating)),
            "timestamp" => Some(Cell::Int(self.timestamp)),
            _ => None,
        }
    }
}

/// One row of `tags`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub user_id: i64,
    pub movie_id: i64,
    pub tag: Option<String>,
    pub timestamp: i64,
}

impl Record for Tag {
    const TABLE: TableName = TableName::Tags;
    const COLUMNS: &'static [&'static str] = &["userId", "movieId", "tag", "timestamp"];

    fn movie_id(&self) -> i64 {
        self.movie_id
    }

    fn cell(&self, column: &str) -> Option<Cell<'_>> {
        match column {
            "userId" => Some(Cell::Int(self.user_id)),
            "movieId" => Some(Cell::Int(self.movie_id)),
            "tag" => Some(opt_text(&self.tag)),
            "timestamp" => Some(Cell::Int(self.timestamp)),
            _ => None,
        }
    }
}

/// One row of `links`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    pub movie_id: i64,
    pub imdb_id: i64,
    pub tmdb_id: Option<i64>,
}

impl Record for Link {
    const TABLE: TableName = TableName::Links;
    const COLUMNS: &'static [&'static str] = &["movieId", "imdbId", "tmdbId"];

    fn movie_id(&self) -> i64 {
        self.movie_id
    }

    fn cell(&self, column: &str) -> Option<Cell<'_>> {
        match column {
            "movieId" => Some(Cell::Int(self.movie_id)),
            "imdbId" => Some(Cell::Int(self.imdb_id)),
            "tmdbId" => Some(opt_int(self.tmdb_id)),
            _ => None,
        }
    }
}
