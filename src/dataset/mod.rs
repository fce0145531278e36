//! # Dataset
//!
//! The fixed, read-only catalog: four tables loaded once at startup and
//! shared immutably for the lifetime of the process.
//!
//! ```ignore
//! let dataset = Dataset::load(Path::new("data"))?;
//! let movies = dataset.movies().rows();
//! ```

pub mod errors;
pub mod loader;
pub mod table;
pub mod types;

use std::collections::BTreeMap;
use std::path::Path;

use tracing::info;

pub use errors::{DatasetError, LoadError, LoadResult};
pub use loader::TableLoader;
pub use table::{Table, TableRef};
pub use types::{Cell, Link, Movie, Rating, Record, Tag, TableName, MOVIE_ID};

/// The four catalog tables.
///
/// There is no way to add, remove or mutate a table after construction.
#[derive(Debug, Clone)]
pub struct Dataset {
    movies: Table<Movie>,
    ratings: Table<Rating>,
    tags: Table<Tag>,
    links: Table<Link>,
}

impl Dataset {
    pub fn new(
        movies: Table<Movie>,
        ratings: Table<Rating>,
        tags: Table<Tag>,
        links: Table<Link>,
    ) -> Self {
        Self {
            movies,
            ratings,
            tags,
            links,
        }
    }

    /// Loads all four tables from `data_dir`, in order. The first failure
    /// aborts the load.
    pub fn load(data_dir: &Path) -> LoadResult<Self> {
        let loader = TableLoader::new(data_dir);

        let dataset = Self::new(
            loader.load()?,
            loader.load()?,
            loader.load()?,
            loader.load()?,
        );

        for (name, rows) in dataset.summary() {
            info!(table = %name, rows, "table loaded");
        }

        Ok(dataset)
    }

    pub fn movies(&self) -> &Table<Movie> {
        &self.movies
    }

    pub fn ratings(&self) -> &Table<Rating> {
        &self.ratings
    }

    pub fn tags(&self) -> &Table<Tag> {
        &self.tags
    }

    pub fn links(&self) -> &Table<Link> {
        &self.links
    }

    /// Looks up a table by name.
    pub fn get_table(&self, name: &str) -> Result<TableRef<'_>, DatasetError> {
        Ok(self.table(name.parse()?))
    }

    pub fn table(&self, name: TableName) -> TableRef<'_> {
        match name {
            TableName::Movies => TableRef::Movies(&self.movies),
            TableName::Ratings => TableRef::Ratings(&self.ratings),
            TableName::Tags => TableRef::Tags(&self.tags),
            TableName::Links => TableRef::Links(&self.links),
        }
    }

    /// Row count per table.
    pub fn summary(&self) -> BTreeMap<TableName, usize> {
        TableName::ALL
            .into_iter()
            .map(|name| (name, self.table(name).len()))
            .collect()
    }
}
