//! # Search Collaborator
//!
//! One operation: look a query up and return a list of titles, or fail.
//! The lookup itself lives behind [`SearchProvider`] so the widget layer
//! and state machine never know whether results come from a remote service
//! or the built-in catalog. Providers may block; the event loop runs them
//! off the loop thread under a fixed timeout (see `main.rs`), so a slow
//! lookup never freezes input or animation. No pagination, no caching, no
//! retry.

use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

/// How long a lookup may run before it is abandoned.
pub const SEARCH_TIMEOUT: Duration = Duration::from_secs(10);

/// One result row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub title: String,
}

/// A failed lookup. Recovered locally and surfaced as a status line,
/// never fatal.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SearchError {
    #[error("timed out after {0:?}")]
    Timeout(Duration),
    #[error("lookup failed: {0}")]
    Fetch(String),
    #[error("malformed response: {0}")]
    Parse(String),
}

/// The lookup seam.
pub trait SearchProvider: Send + Sync {
    fn search(&self, query: &str) -> Result<Vec<SearchHit>, SearchError>;
}

/// Response shape: a `data` array of titled entries.
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    data: Vec<CatalogEntry>,
}

#[derive(Debug, Deserialize)]
struct CatalogEntry {
    title: String,
}

/// Built-in catalog provider: case-insensitive substring match over a
/// fixed list of titles, so the binary is usable with no remote service.
pub struct CatalogProvider {
    titles: Vec<String>,
}

const BUILTIN_CATALOG: &str = r#"{
  "data": [
    {"title": "Apples"}, {"title": "Bananas"}, {"title": "Avocado"},
    {"title": "Grapes"}, {"title": "Oranges"}, {"title": "Pineapple"},
    {"title": "Mango"}, {"title": "Strawberries"}, {"title": "Blueberries"},
    {"title": "Peaches"}, {"title": "Cherries"}, {"title": "Watermelon"},
    {"title": "Lemon"}, {"title": "Lime"}, {"title": "Kiwi"},
    {"title": "Papaya"}, {"title": "Passion Fruit"}, {"title": "Dragon Fruit"},
    {"title": "Pomegranate"}, {"title": "Coconut"}
  ]
}"#;

impl CatalogProvider {
    /// The catalog shipped with the binary.
    pub fn builtin() -> Result<Self, SearchError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Parse a catalog document (`{"data": [{"title": ...}, ...]}`).
    pub fn from_json(json: &str) -> Result<Self, SearchError> {
        let document: CatalogDocument =
            serde_json::from_str(json).map_err(|e| SearchError::Parse(e.to_string()))?;
        Ok(Self {
            titles: document.data.into_iter().map(|entry| entry.title).collect(),
        })
    }

    /// A catalog over explicit titles.
    pub fn from_titles<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            titles: titles.into_iter().map(Into::into).collect(),
        }
    }
}

impl SearchProvider for CatalogProvider {
    fn search(&self, query: &str) -> Result<Vec<SearchHit>, SearchError> {
        let needle = query.trim().to_lowercase();
        Ok(self
            .titles
            .iter()
            .filter(|title| title.to_lowercase().contains(&needle))
            .map(|title| SearchHit {
                title: title.clone(),
            })
            .collect())
    }
}
