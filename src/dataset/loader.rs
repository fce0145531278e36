//! Table loader for reading CSV tables from disk at startup
//!
//! - One file per table inside the data directory (`movies.csv`, ...)
//! - The header row names the columns; every column the record declares
//!   must be present
//! - Missing or malformed files cause startup failure

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::errors::{LoadError, LoadResult};
use super::table::Table;
use super::types::{Record, TableName};

/// Loader that reads table files from a data directory.
#[derive(Debug, Clone)]
pub struct TableLoader {
    data_dir: PathBuf,
}

impl TableLoader {
    /// Creates a loader for the given data directory.
    pub fn new(data_dir: &Path) -> Self {
        Self {
            data_dir: data_dir.to_path_buf(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path of the source file for a table.
    pub fn path_for(&self, name: TableName) -> PathBuf {
        self.data_dir.join(name.file_name())
    }

    /// Loads the table backing record type `R`.
    pub fn load<R: Record>(&self) -> LoadResult<Table<R>> {
        load_path(&self.path_for(R::TABLE))
    }
}

/// Loads a table from a CSV file.
pub fn load_path<R: Record>(path: &Path) -> LoadResult<Table<R>> {
    let file = File::open(path).map_err(|e| LoadError::io(path, e))?;
    debug!(table = %R::TABLE, path = %path.display(), "loading table");
    load_reader(file)
}

/// Loads a table from any CSV source.
///
/// Rows keep their source order. A row with a different number of fields
/// than the header, or a value that does not fit the column's type, fails
/// the whole load.
pub fn load_reader<R: Record, S: Read>(source: S) -> LoadResult<Table<R>> {
    let table = R::TABLE.as_str();
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(source);

    let columns: Vec<String> = reader
        .headers()
        .map_err(|e| LoadError::csv(table, e))?
        .iter()
        .map(str::to_string)
        .collect();

    if let Some(missing) = R::COLUMNS
        .iter()
        .find(|required| !columns.iter().any(|c| c.as_str() == **required))
    {
        return Err(LoadError::missing_column(table, *missing));
    }

    let rows = reader
        .deserialize::<R>()
        .collect::<Result<Vec<R>, csv::Error>>()
        .map_err(|e| LoadError::csv(table, e))?;

    Ok(Table::new(columns, rows))
}
