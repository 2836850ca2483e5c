//! Outbound HTTP client for the movie search endpoint.
//!
//! [`MovieFetch`] is the seam the search session is generic over, so tests
//! can substitute a scripted client for the real one. [`HttpMovieClient`]
//! is the production implementation on top of `reqwest`.

use std::future::Future;
use std::time::Duration;

use reqwest::{Client, Url};
use thiserror::Error;

use crate::config::ApiConfig;

/// Errors that can occur while fetching a page of search results.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request URL could not be constructed.
    #[error("Invalid search endpoint '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The transport reported an error.
    #[error("Search request failed: {source}")]
    Transport {
        #[source]
        source: reqwest::Error,
    },
}

/// Fetch one page of raw search results for a query.
///
/// Implementations yield the response body bytes without inspecting
/// status or content type; interpreting the payload is the caller's job.
pub trait MovieFetch {
    fn fetch(
        &self,
        query: &str,
        page: u32,
    ) -> impl Future<Output = Result<Vec<u8>, FetchError>> + Send;
}

/// `reqwest`-backed search client.
///
/// One request per call: no retries and no timeout policy beyond the
/// configured request timeout.
pub struct HttpMovieClient {
    client: Client,
    search_base_url: String,
    api_key: String,
}

impl HttpMovieClient {
    /// Create a client from API configuration.
    pub fn new(api: &ApiConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(u64::from(api.timeout_seconds)))
            .build()
            .expect("Failed to build search client");

        Self {
            client,
            search_base_url: api.search_base_url.clone(),
            api_key: api.api_key.clone(),
        }
    }

    /// Build the search endpoint URL for a query and page.
    ///
    /// Query-pair encoding handles titles the raw endpoint string could
    /// not carry (spaces, punctuation, non-ASCII).
    fn endpoint(&self, query: &str, page: u32) -> Result<Url, FetchError> {
        let mut url =
            Url::parse(&self.search_base_url).map_err(|e| FetchError::InvalidUrl {
                url: self.search_base_url.clone(),
                reason: e.to_string(),
            })?;

        url.query_pairs_mut()
            .append_pair("api_key", &self.api_key)
            .append_pair("query", query)
            .append_pair("page", &page.to_string());

        Ok(url)
    }

    async fn fetch_page(&self, query: &str, page: u32) -> Result<Vec<u8>, FetchError> {
        let url = self.endpoint(query, page)?;

        tracing::debug!(query = %query, page, "Fetching search results");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Transport { source: e })?;

        let bytes = response
            .bytes()
            .await
            .map_err(|e| FetchError::Transport { source: e })?;

        Ok(bytes.to_vec())
    }
}

impl MovieFetch for HttpMovieClient {
    fn fetch(
        &self,
        query: &str,
        page: u32,
    ) -> impl Future<Output = Result<Vec<u8>, FetchError>> + Send {
        self.fetch_page(query, page)
    }
}
