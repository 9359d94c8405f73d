//! The catalog store: long-lived in-memory state plus its load/save cycle.
//!
//! The store owns the author-grouped catalog and the two partition sets
//! tracking availability. It is loaded once, mutated in memory, and
//! persisted only on an explicit save. All operations are synchronous and
//! none of them print; callers decide how to surface results.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use crate::catalog::pattern::KeywordPattern;
use crate::catalog::types::{Book, BookListing, CatalogFile, ListFilter, SearchMatch, Status};
use crate::error::{Result, ShelfError};
use crate::fs::write_atomic;

/// Earliest accepted publication year.
pub const YEAR_MIN: i32 = 1000;
/// Latest accepted publication year.
pub const YEAR_MAX: i32 = 9999;

/// The in-memory book catalog bound to one library file.
///
/// Invariant: `available` and `borrowed` are disjoint, and their union is
/// exactly the set of indices appearing in `books`.
#[derive(Debug)]
pub struct CatalogStore {
    path: PathBuf,
    books: BTreeMap<String, Vec<Book>>,
    available: BTreeSet<u32>,
    borrowed: BTreeSet<u32>,
}

impl CatalogStore {
    /// Load a catalog from `path`.
    ///
    /// A missing file yields an empty store bound to that path. Legacy
    /// files that recorded books but neither partition list are backfilled
    /// once: every book is marked available.
    ///
    /// # Errors
    ///
    /// Returns `ShelfError::Malformed` if the file exists but is not valid
    /// JSON in the library format, or `ShelfError::Storage` if it cannot
    /// be read. A malformed file is fatal, never silently reset.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if !path.exists() {
            return Ok(Self {
                path,
                books: BTreeMap::new(),
                available: BTreeSet::new(),
                borrowed: BTreeSet::new(),
            });
        }

        let contents = std::fs::read_to_string(&path)?;
        let file: CatalogFile = serde_json::from_str(&contents)?;

        let mut available: BTreeSet<u32> = file.available_books.into_iter().collect();
        let borrowed: BTreeSet<u32> = file.borrowed_books.into_iter().collect();
        if available.is_empty() && borrowed.is_empty() {
            // Legacy files recorded books without status lists.
            for book in file.books.values().flatten() {
                available.insert(book.index);
            }
        }

        Ok(Self {
            path,
            books: file.books,
            available,
            borrowed,
        })
    }

    /// Persist the catalog to its library file atomically.
    ///
    /// # Errors
    ///
    /// Returns `ShelfError::Storage` if the file cannot be written.
    pub fn save(&self) -> Result<()> {
        let file = CatalogFile {
            books: self.books.clone(),
            borrowed_books: self.borrowed.iter().copied().collect(),
            available_books: self.available.iter().copied().collect(),
        };
        let data = serde_json::to_vec(&file)?;
        write_atomic(&self.path, &data)?;
        Ok(())
    }

    /// The library file this store loads from and saves to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse a publication year from user input.
    ///
    /// # Errors
    ///
    /// Returns `ShelfError::InvalidYear` for non-numeric input or a year
    /// outside [`YEAR_MIN`], [`YEAR_MAX`].
    pub fn parse_year(value: &str) -> Result<i32> {
        let trimmed = value.trim();
        let year: i32 = trimmed
            .parse()
            .map_err(|_| ShelfError::InvalidYear(trimmed.to_string()))?;
        if !(YEAR_MIN..=YEAR_MAX).contains(&year) {
            return Err(ShelfError::InvalidYear(trimmed.to_string()));
        }
        Ok(year)
    }

    /// Add a book under `author`, returning its assigned index.
    ///
    /// The index is the running total of known books plus one; indices are
    /// never reused. The new book starts out available.
    ///
    /// # Errors
    ///
    /// Returns `ShelfError::InvalidYear` if `year` is outside the accepted
    /// range; the catalog is not touched.
    pub fn add_book(&mut self, author: &str, title: &str, year: i32) -> Result<u32> {
        if !(YEAR_MIN..=YEAR_MAX).contains(&year) {
            return Err(ShelfError::InvalidYear(year.to_string()));
        }

        let index = self.total_books() as u32 + 1;
        self.books.entry(author.to_string()).or_default().push(Book {
            index,
            title: title.to_string(),
            year,
        });
        self.available.insert(index);
        Ok(index)
    }

    /// Search authors and titles for `keyword`.
    ///
    /// `*` in the keyword matches any sequence of characters; without it
    /// the match is a case-insensitive substring test. An empty keyword
    /// matches every book. Results come back in the store's natural order
    /// (author, then insertion), each with its status at query time.
    pub fn search(&self, keyword: &str) -> Result<Vec<SearchMatch>> {
        let pattern = KeywordPattern::compile(keyword)?;
        let mut results = Vec::new();
        for (author, books) in &self.books {
            for book in books {
                if pattern.matches(author) || pattern.matches(&book.title) {
                    results.push(SearchMatch {
                        author: author.clone(),
                        book: book.clone(),
                        status: self.status_of(book.index),
                    });
                }
            }
        }
        Ok(results)
    }

    /// Move `index` from the available set to the borrowed set.
    ///
    /// # Errors
    ///
    /// Returns `ShelfError::NotAvailable` if the index is already borrowed
    /// or unknown; nothing changes.
    pub fn borrow_book(&mut self, index: u32) -> Result<()> {
        if !self.available.remove(&index) {
            return Err(ShelfError::NotAvailable(index));
        }
        self.borrowed.insert(index);
        Ok(())
    }

    /// Move `index` from the borrowed set back to the available set.
    ///
    /// # Errors
    ///
    /// Returns `ShelfError::NotBorrowed` if the index is not currently
    /// borrowed; nothing changes.
    pub fn return_book(&mut self, index: u32) -> Result<()> {
        if !self.borrowed.remove(&index) {
            return Err(ShelfError::NotBorrowed(index));
        }
        self.available.insert(index);
        Ok(())
    }

    /// List books in natural order, optionally only the available ones.
    ///
    /// The available-only filter consults the live available set for every
    /// row, as does the status column.
    pub fn list(&self, filter: ListFilter) -> Vec<BookListing> {
        let mut rows = Vec::new();
        for (author, books) in &self.books {
            for book in books {
                if filter == ListFilter::AvailableOnly && !self.available.contains(&book.index) {
                    continue;
                }
                rows.push(BookListing {
                    index: book.index,
                    author: author.clone(),
                    title: book.title.clone(),
                    year: book.year,
                    status: self.status_of(book.index),
                });
            }
        }
        rows
    }

    /// Status of one index from the live partition sets.
    pub fn status_of(&self, index: u32) -> Status {
        if self.borrowed.contains(&index) {
            Status::Borrowed
        } else {
            Status::Available
        }
    }

    /// Total number of known book indices (available plus borrowed).
    pub fn total_books(&self) -> usize {
        self.available.len() + self.borrowed.len()
    }

    /// Whether the catalog holds no books at all.
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Verify the partition invariant.
    ///
    /// # Errors
    ///
    /// Returns `ShelfError::Malformed` describing the first violation:
    /// an index in both sets, a book with no status, or a status entry
    /// with no matching book.
    pub fn check_integrity(&self) -> Result<()> {
        if let Some(index) = self.available.intersection(&self.borrowed).next() {
            return Err(ShelfError::Malformed(format!(
                "index {} is both available and borrowed",
                index
            )));
        }

        let mut tracked: BTreeSet<u32> = self.available.union(&self.borrowed).copied().collect();
        for book in self.books.values().flatten() {
            if !tracked.remove(&book.index) {
                return Err(ShelfError::Malformed(format!(
                    "book index {} has no status entry",
                    book.index
                )));
            }
        }
        if let Some(index) = tracked.iter().next() {
            return Err(ShelfError::Malformed(format!(
                "status entry for unknown index {}",
                index
            )));
        }
        Ok(())
    }
}
