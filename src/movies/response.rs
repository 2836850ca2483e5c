use serde::Deserialize;
use thiserror::Error;

use crate::movies::model::MovieRecord;

/// The response body is not valid JSON or lacks the expected shape.
#[derive(Debug, Error)]
#[error("Failed to parse search response: {source}")]
pub struct ParseError {
    #[from]
    source: serde_json::Error,
}

/// One page of search results as returned by the API.
///
/// `page` and `total_pages` default to zero when absent; `results` is
/// required, so a syntactically valid body without it is a parse error
/// rather than an empty result set.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub total_pages: u32,
    pub results: Vec<ResultEntry>,
}

/// One element of the `results` array. Unknown fields are ignored;
/// the interesting fields are all optional strings.
#[derive(Debug, Deserialize)]
pub struct ResultEntry {
    #[serde(default)]
    poster_path: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    release_date: Option<String>,
    #[serde(default)]
    overview: Option<String>,
}

impl From<ResultEntry> for MovieRecord {
    fn from(entry: ResultEntry) -> Self {
        Self {
            poster_path: entry.poster_path,
            title: entry.title,
            release_date: entry.release_date,
            overview: entry.overview,
        }
    }
}

/// Parse a raw response body into a [`SearchResponse`].
pub fn parse_search_response(bytes: &[u8]) -> Result<SearchResponse, ParseError> {
    let response = serde_json::from_slice(bytes)?;
    Ok(response)
}
