//! The catalog store: books grouped by author, the available/borrowed
//! partition, and the on-disk JSON format.

mod pattern;
mod store;
mod types;

pub use pattern::KeywordPattern;
pub use store::{CatalogStore, YEAR_MAX, YEAR_MIN};
pub use types::{Book, BookListing, CatalogFile, ListFilter, SearchMatch, Status};
