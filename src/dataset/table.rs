//! In-memory tables
//!
//! A table is loaded once and never mutated; all access is through shared
//! references.

use super::types::{Link, Movie, Rating, Record, Tag, TableName};

/// An ordered, immutable collection of typed rows.
#[derive(Debug, Clone)]
pub struct Table<R: Record> {
    /// Header columns as read from the source
    columns: Vec<String>,
    /// Rows in source order
    rows: Vec<R>,
}

impl<R: Record> Table<R> {
    /// Creates a table from header columns and rows.
    pub fn new(columns: Vec<String>, rows: Vec<R>) -> Self {
        Self { columns, rows }
    }

    /// Creates a table with the record's declared columns.
    pub fn from_rows(rows: Vec<R>) -> Self {
        let columns = R::COLUMNS.iter().map(|c| c.to_string()).collect();
        Self::new(columns, rows)
    }

    pub fn name(&self) -> TableName {
        R::TABLE
    }

    pub fn key_column(&self) -> &'static str {
        R::TABLE.key_column()
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// A borrowed view over any one of the four tables
#[derive(Debug, Clone, Copy)]
pub enum TableRef<'a> {
    Movies(&'a Table<Movie>),
    Ratings(&'a Table<Rating>),
    Tags(&'a Table<Tag>),
    Links(&'a Table<Link>),
}

impl<'a> TableRef<'a> {
    pub fn name(&self) -> TableName {
        match self {
            TableRef::Movies(t) => t.name(),
            TableRef::Ratings(t) => t.name(),
            TableRef::Tags(t) => t.name(),
            TableRef::Links(t) => t.name(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            TableRef::Movies(t) => t.len(),
            TableRef::Ratings(t) => t.len(),
            TableRef::Tags(t) => t.len(),
            TableRef::Links(t) => t.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn columns(&self) -> &'a [String] {
        match self {
            TableRef::Movies(t) => t.columns(),
            TableRef::Ratings(t) => t.columns(),
            TableRef::Tags(t) => t.columns(),
            TableRef::Links(t) => t.columns(),
        }
    }

    pub fn key_column(&self) -> &'static str {
        self.name().key_column()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_uses_declared_columns() {
        let table = Table::from_rows(vec![Movie {
            movie_id: 1,
            title: "Toy Story (1995)".to_string(),
            genres: "Animation|Comedy".to_string(),
        }]);

        assert_eq!(table.name(), TableName::Movies);
        assert_eq!(table.key_column(), "movieId");
        assert_eq!(table.columns(), ["movieId", "title", "genres"]);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_table_ref_view() {
        let table: Table<Link> = Table::from_rows(Vec::new());
        let view = TableRef::Links(&table);

        assert_eq!(view.name(), TableName::Links);
        assert!(view.is_empty());
        assert_eq!(view.columns().len(), 3);
    }
}
