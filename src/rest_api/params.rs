//! # Query Parameter Parsing
//!
//! Turns raw query-string parameters into validated engine inputs. The
//! query engine never sees an unvalidated page request.

use std::collections::HashMap;
use std::num::IntErrorKind;

use crate::query::{FilterSet, PageSpec, SubstringFilter, DEFAULT_PAGE, DEFAULT_PER_PAGE};

use super::errors::{RestError, RestResult};

/// Search parameter → movie column it filters
const MOVIE_SEARCH_PARAMS: [(&str, &str); 2] = [("title", "title"), ("genre", "genres")];

/// Parse `page` and `per_page`, defaulting to 1 and 10.
///
/// Both must be integers of at least 1. When `max_per_page` is set,
/// larger page sizes are rejected as well.
pub fn parse_page_spec(
    params: &HashMap<String, String>,
    max_per_page: Option<usize>,
) -> RestResult<PageSpec> {
    let page = parse_positive(params, "page", DEFAULT_PAGE)?;
    let per_page = parse_positive(params, "per_page", DEFAULT_PER_PAGE)?;

    if let Some(max) = max_per_page {
        if per_page > max {
            return Err(RestError::InvalidPagination(format!(
                "per_page must not exceed {}",
                max
            )));
        }
    }

    PageSpec::new(page, per_page).ok_or_else(positivity_error)
}

/// Build the movie search filters from `title` and `genre`.
///
/// Absent or empty parameters add no filter.
pub fn parse_movie_search(params: &HashMap<String, String>) -> FilterSet {
    MOVIE_SEARCH_PARAMS
        .iter()
        .filter_map(|(param, column)| {
            params
                .get(*param)
                .filter(|v| !v.is_empty())
                .map(|v| SubstringFilter::new(*column, v))
        })
        .fold(FilterSet::new(), FilterSet::and)
}

/// Parse a `{movieId}` path segment.
///
/// A segment that is not an integer does not address any resource.
pub fn parse_movie_id(segment: &str) -> RestResult<i64> {
    segment.parse().map_err(|_| RestError::RouteNotFound)
}

fn parse_positive(params: &HashMap<String, String>, name: &str, default: usize) -> RestResult<usize> {
    let Some(raw) = params.get(name) else {
        return Ok(default);
    };
    let trimmed = raw.trim();

    match trimmed.parse::<usize>() {
        Ok(0) => Err(positivity_error()),
        Ok(value) => Ok(value),
        // Beyond usize is still a positive integer; paging saturates.
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Ok(usize::MAX),
        Err(_) if is_negative_integer(trimmed) => Err(positivity_error()),
        Err(_) => Err(RestError::InvalidPagination(format!(
            "{} must be a positive integer, got '{}'",
            name, raw
        ))),
    }
}

fn is_negative_integer(s: &str) -> bool {
    s.strip_prefix('-')
        .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
}

fn positivity_error() -> RestError {
    RestError::InvalidPagination("Page and per_page must be positive integers.".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults() {
        let spec = parse_page_spec(&HashMap::new(), None).unwrap();
        assert_eq!(spec.page(), 1);
        assert_eq!(spec.per_page(), 10);
    }

    #[test]
    fn test_explicit_values() {
        let spec = parse_page_spec(&params(&[("page", "3"), ("per_page", "25")]), None).unwrap();
        assert_eq!(spec.page(), 3);
        assert_eq!(spec.per_page(), 25);
    }

    #[test]
    fn test_zero_is_rejected() {
        for (k, v) in [("page", "0"), ("per_page", "0"), ("page", "-4")] {
            let err = parse_page_spec(&params(&[(k, v)]), None).unwrap_err();
            assert_eq!(
                err.to_string(),
                "Invalid pagination parameters: Page and per_page must be positive integers."
            );
        }
    }

    #[test]
    fn test_negative_beyond_i64_is_a_positivity_error() {
        let err = parse_page_spec(&params(&[("page", "-99999999999999999999")]), None).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid pagination parameters: Page and per_page must be positive integers."
        );
    }

    #[test]
    fn test_huge_page_saturates() {
        let spec = parse_page_spec(&params(&[("page", "99999999999999999999")]), None).unwrap();
        assert_eq!(spec.page(), usize::MAX);

        let err = parse_page_spec(&params(&[("per_page", "99999999999999999999")]), Some(100))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid pagination parameters: per_page must not exceed 100"
        );
    }

    #[test]
    fn test_non_numeric_is_rejected() {
        let err = parse_page_spec(&params(&[("per_page", "ten")]), None).unwrap_err();
        assert!(matches!(err, RestError::InvalidPagination(_)));
        assert!(err.to_string().contains("positive integer"));
        assert!(err.to_string().contains("'ten'"));
    }

    #[test]
    fn test_per_page_cap() {
        let ok = parse_page_spec(&params(&[("per_page", "100")]), Some(100));
        assert!(ok.is_ok());

        let err = parse_page_spec(&params(&[("per_page", "101")]), Some(100)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid pagination parameters: per_page must not exceed 100"
        );
    }

    #[test]
    fn test_movie_search_filters() {
        let set = parse_movie_search(&params(&[("title", "Toy"), ("genre", "Comedy")]));
        assert_eq!(set.filters.len(), 2);
        assert_eq!(set.filters[0].column, "title");
        assert_eq!(set.filters[1].column, "genres");
        assert_eq!(set.filters[1].needle(), "comedy");

        let empty = parse_movie_search(&params(&[("title", ""), ("page", "2")]));
        assert!(empty.is_empty());
    }

    #[test]
    fn test_movie_id_segment() {
        assert_eq!(parse_movie_id("42").unwrap(), 42);
        assert_eq!(parse_movie_id("abc").unwrap_err(), RestError::RouteNotFound);
    }
}
