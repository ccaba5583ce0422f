use serde::{Deserialize, Serialize};

/// Body of a collection endpoint
///
/// Collections come back either as a bare JSON array or, when server-side
/// pagination is enabled, wrapped in a page envelope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ListResponse<T> {
    /// Paginated envelope
    Page {
        /// Total number of items across all pages
        count: u64,
        /// URL of the next page
        #[serde(default)]
        next: Option<String>,
        /// URL of the previous page
        #[serde(default)]
        previous: Option<String>,
        /// Items of this page
        results: Vec<T>,
    },
    /// Plain array
    Items(Vec<T>),
}

impl<T> ListResponse<T> {
    /// Items of the response, dropping any pagination data
    pub fn into_vec(self) -> Vec<T> {
        match self {
            ListResponse::Page { results, .. } => results,
            ListResponse::Items(items) => items,
        }
    }

    /// Whether more pages are available
    pub fn has_next(&self) -> bool {
        matches!(self, ListResponse::Page { next: Some(_), .. })
    }
}
