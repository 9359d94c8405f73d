//! Keyword matching for catalog search.
//!
//! A keyword containing `*` becomes a wildcard pattern where `*` matches
//! any sequence of characters and everything else is literal. The
//! translation escapes each literal segment, so regex metacharacters in
//! user input (or in titles being matched) never change the meaning of a
//! search. Keywords without `*` use a plain case-insensitive substring
//! test.

use regex::{Regex, RegexBuilder};

use crate::error::{Result, ShelfError};

/// A compiled search keyword.
#[derive(Debug, Clone)]
pub enum KeywordPattern {
    /// Lowercased needle for a substring containment test
    Substring(String),
    /// Unanchored case-insensitive regex built from a `*` wildcard keyword
    Wildcard(Regex),
}

impl KeywordPattern {
    /// Compile a user keyword.
    ///
    /// # Errors
    ///
    /// Returns `ShelfError::Pattern` if the translated wildcard expression
    /// fails to compile (only reachable through regex size limits).
    pub fn compile(keyword: &str) -> Result<Self> {
        if !keyword.contains('*') {
            return Ok(Self::Substring(keyword.to_lowercase()));
        }

        let translated: String = keyword
            .split('*')
            .map(|segment| regex::escape(segment))
            .collect::<Vec<_>>()
            .join(".*");
        let regex = RegexBuilder::new(&translated)
            .case_insensitive(true)
            .build()
            .map_err(|e| ShelfError::Pattern(e.to_string()))?;
        Ok(Self::Wildcard(regex))
    }

    /// Containment test against one field; never anchored to the whole string.
    pub fn matches(&self, text: &str) -> bool {
        match self {
            Self::Substring(needle) => text.to_lowercase().contains(needle),
            Self::Wildcard(regex) => regex.is_match(text),
        }
    }
}
