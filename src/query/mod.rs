//! # Query Engine
//!
//! Stateless, read-only operations over table rows: key lookups,
//! case-insensitive substring search and pagination.

pub mod filter;
pub mod paginate;

pub use filter::{filter_by_key, filter_by_substring, filter_combined, FilterSet, SubstringFilter};
pub use paginate::{paginate, PageResult, PageSpec, DEFAULT_PAGE, DEFAULT_PER_PAGE};
