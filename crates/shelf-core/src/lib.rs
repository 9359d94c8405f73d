//! # Shelf Core
//!
//! Core library for Shelf - a single-user CLI book collection manager.
//!
//! This crate provides the catalog store, its persistence format, and all
//! query/mutation operations, independent of the CLI interface.
//!
//! ## Architecture
//!
//! - **catalog**: The catalog store - books grouped by author, the
//!   available/borrowed partition sets, and the load/save cycle
//! - **error**: Typed errors for validation, eligibility, and persistence
//! - **fs**: Atomic file write helpers
//!
//! The store never prints; every operation returns values or typed errors
//! and the CLI layer decides how to present them.

pub mod catalog;
pub mod error;
pub mod fs;

pub use catalog::{Book, BookListing, CatalogStore, ListFilter, SearchMatch, Status};
pub use error::{Result, ShelfError};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
