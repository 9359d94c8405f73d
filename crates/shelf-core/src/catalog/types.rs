//! Core data types for the catalog and its persisted form.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// One physical copy of a book.
///
/// The index is unique across the whole catalog, assigned once at creation
/// and never reused. Title and year are immutable after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Unique, 1-based catalog index
    #[serde(deserialize_with = "coerce_index")]
    pub index: u32,

    /// Book title
    pub title: String,

    /// Publication year, validated to [1000, 9999] on creation
    pub year: i32,
}

/// Whether a copy currently sits on the shelf or is out on loan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Available,
    Borrowed,
}

impl Status {
    /// Plain-text label, used verbatim by the CLI layer.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Borrowed => "Borrowed",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Filter for listing operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListFilter {
    /// Every book in the catalog
    #[default]
    All,
    /// Only books whose index is in the live available set
    AvailableOnly,
}

/// A single search hit: the book, its author, and its status at query time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchMatch {
    pub author: String,
    pub book: Book,
    pub status: Status,
}

/// One row of a listing, flattened for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookListing {
    pub index: u32,
    pub author: String,
    pub title: String,
    pub year: i32,
    pub status: Status,
}

/// The persisted library file.
///
/// Wire names are fixed: `books`, `borrowedBooks`, `availableBooks`.
/// Missing keys read as empty, and index values are accepted as either
/// JSON numbers or numeric strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogFile {
    #[serde(default)]
    pub books: BTreeMap<String, Vec<Book>>,

    #[serde(default, deserialize_with = "coerce_indices")]
    pub borrowed_books: Vec<u32>,

    #[serde(default, deserialize_with = "coerce_indices")]
    pub available_books: Vec<u32>,
}

/// An index as it may appear on disk: a number, or a numeric string.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawIndex {
    Number(u32),
    Text(String),
}

impl RawIndex {
    fn into_index(self) -> Result<u32, String> {
        match self {
            Self::Number(value) => Ok(value),
            Self::Text(text) => text
                .trim()
                .parse()
                .map_err(|_| format!("invalid index value {:?}", text)),
        }
    }
}

fn coerce_index<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    RawIndex::deserialize(deserializer)?
        .into_index()
        .map_err(serde::de::Error::custom)
}

fn coerce_indices<'de, D>(deserializer: D) -> Result<Vec<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    Vec::<RawIndex>::deserialize(deserializer)?
        .into_iter()
        .map(|raw| raw.into_index().map_err(serde::de::Error::custom))
        .collect()
}
