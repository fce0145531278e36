//! # Row Filters
//!
//! Key-equality and case-insensitive substring filters over table rows.
//! Every filter borrows the source rows and returns a new vector in the
//! original order; the source is never modified.

use crate::dataset::{Cell, Record};

/// Case-insensitive substring filter on one column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstringFilter {
    /// Column to search
    pub column: String,

    /// Needle, stored lowercased
    needle: String,
}

impl SubstringFilter {
    /// Create a new substring filter
    pub fn new(column: impl Into<String>, needle: &str) -> Self {
        Self {
            column: column.into(),
            needle: needle.to_lowercase(),
        }
    }

    /// The lowercased needle
    pub fn needle(&self) -> &str {
        &self.needle
    }

    /// Check if a row matches this filter.
    ///
    /// An empty needle matches every row. Otherwise rows whose value is
    /// null, or that lack the column, never match.
    pub fn matches<R: Record>(&self, row: &R) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        row.cell(&self.column)
            .is_some_and(|cell| cell.contains_lowercase(&self.needle))
    }
}

/// A set of substring filters combined with AND logic
#[derive(Debug, Clone, Default)]
pub struct FilterSet {
    pub filters: Vec<SubstringFilter>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn and(mut self, filter: SubstringFilter) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Apply every filter, left to right
    pub fn apply<'a, R: Record>(&self, rows: &'a [R]) -> Vec<&'a R> {
        filter_combined(rows, &self.filters)
    }
}

/// Rows whose `column` equals `value`, with typed comparison.
pub fn filter_by_key<'a, R: Record>(rows: &'a [R], column: &str, value: &Cell<'_>) -> Vec<&'a R> {
    rows.iter()
        .filter(|row| row.cell(column).is_some_and(|cell| cell.key_eq(value)))
        .collect()
}

/// Rows whose `column` contains `needle`, ignoring case.
pub fn filter_by_substring<'a, R: Record>(rows: &'a [R], column: &str, needle: &str) -> Vec<&'a R> {
    let filter = SubstringFilter::new(column, needle);
    rows.iter().filter(|row| filter.matches(*row)).collect()
}

/// Logical AND of all filters. The output of each filter feeds the next;
/// with no filters every row is returned.
pub fn filter_combined<'a, R: Record>(rows: &'a [R], filters: &[SubstringFilter]) -> Vec<&'a R> {
    let mut current: Vec<&'a R> = rows.iter().collect();
    for filter in filters {
        current.retain(|row| filter.matches(*row));
    }
    current
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{Link, Movie, Rating, Tag};

    fn movie(id: i64, title: &str, genres: &str) -> Movie {
        Movie {
            movie_id: id,
            title: title.to_string(),
            genres: genres.to_string(),
        }
    }

    fn movies() -> Vec<Movie> {
        vec![
            movie(1, "Toy Story (1995)", "Animation|Comedy"),
            movie(2, "Jumanji (1995)", "Adventure|Fantasy"),
            movie(3, "Grumpier Old Men (1995)", "Comedy|Romance"),
            movie(6, "Heat (1995)", "Action|Crime|Thriller"),
        ]
    }

    #[test]
    fn test_substring_scenario() {
        let all = movies();
        let rows = &all[..2];
        let result = filter_by_substring(rows, "genres", "comedy");
        assert_eq!(result, vec![&rows[0]]);
    }

    #[test]
    fn test_substring_is_case_insensitive() {
        let rows = movies();
        let upper = filter_by_substring(&rows, "genres", "ACTION");
        let lower = filter_by_substring(&rows, "genres", "action");
        assert_eq!(upper, lower);
        assert_eq!(upper.len(), 1);
        assert_eq!(upper[0].movie_id, 6);
    }

    #[test]
    fn test_empty_needle_matches_all() {
        let rows = movies();
        assert_eq!(filter_by_substring(&rows, "title", "").len(), rows.len());
    }

    #[test]
    fn test_null_values_never_match() {
        let rows = vec![
            Tag {
                user_id: 1,
                movie_id: 1,
                tag: None,
                timestamp: 0,
            },
            Tag {
                user_id: 1,
                movie_id: 2,
                tag: Some("pixar".to_string()),
                timestamp: 0,
            },
        ];
        let result = filter_by_substring(&rows, "tag", "x");
        assert_eq!(result, vec![&rows[1]]);
    }

    #[test]
    fn test_unknown_column_never_matches() {
        let rows = movies();
        assert!(filter_by_substring(&rows, "director", "a").is_empty());
    }

    #[test]
    fn test_filter_by_key_preserves_order() {
        let rows = vec![
            Rating {
                user_id: 1,
                movie_id: 1,
                rating: 4.0,
                timestamp: 964982703,
            },
            Rating {
                user_id: 1,
                movie_id: 3,
                rating: 4.0,
                timestamp: 964981247,
            },
            Rating {
                user_id: 5,
                movie_id: 1,
                rating: 4.0,
                timestamp: 847434962,
            },
        ];

        let result = filter_by_key(&rows, "movieId", &Cell::Int(1));
        assert_eq!(result, vec![&rows[0], &rows[2]]);
        assert!(filter_by_key(&rows, "movieId", &Cell::Int(999)).is_empty());
    }

    #[test]
    fn test_substring_on_float_column() {
        let rows = vec![
            Rating {
                user_id: 1,
                movie_id: 1,
                rating: 4.0,
                timestamp: 964982703,
            },
            Rating {
                user_id: 2,
                movie_id: 1,
                rating: 4.5,
                timestamp: 964982704,
            },
        ];
        assert_eq!(filter_by_substring(&rows, "rating", "4.0"), vec![&rows[0]]);
        assert_eq!(filter_by_substring(&rows, "rating", "4.").len(), 2);
    }

    #[test]
    fn test_filter_by_key_nullable_column() {
        let rows = vec![
            Link {
                movie_id: 1,
                imdb_id: 114709,
                tmdb_id: Some(862),
            },
            Link {
                movie_id: 791,
                imdb_id: 113610,
                tmdb_id: None,
            },
        ];
        assert_eq!(filter_by_key(&rows, "tmdbId", &Cell::Int(862)).len(), 1);
        assert!(filter_by_key(&rows, "tmdbId", &Cell::Null).is_empty());
    }

    #[test]
    fn test_combined_filters() {
        let rows = movies();
        let filters = vec![
            SubstringFilter::new("title", "1995"),
            SubstringFilter::new("genres", "comedy"),
        ];
        let result = filter_combined(&rows, &filters);
        let ids: Vec<i64> = result.iter().map(|m| m.movie_id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_no_filters_returns_everything() {
        let rows = movies();
        let result = FilterSet::new().apply(&rows);
        assert_eq!(result.len(), rows.len());
    }

    #[test]
    fn test_filter_set_and() {
        let rows = movies();
        let set = FilterSet::new()
            .and(SubstringFilter::new("title", "o"))
            .and(SubstringFilter::new("genres", "ROMANCE"));
        let result = set.apply(&rows);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].movie_id, 3);
    }
}
