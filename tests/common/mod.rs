//! Scripted fetch client and response fixtures for session tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::future::Future;
use std::sync::{Arc, Mutex};

use serde_json::json;

use marquee::client::{FetchError, MovieFetch};

#[derive(Default)]
struct MockState {
    responses: Mutex<VecDeque<Result<Vec<u8>, FetchError>>>,
    calls: Mutex<Vec<(String, u32)>>,
}

/// Fetch client that replays queued responses and records calls.
///
/// Clones share state, so tests keep one handle for scripting and
/// assertions while the session owns another.
#[derive(Clone, Default)]
pub struct MockMovieClient {
    state: Arc<MockState>,
}

impl MockMovieClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful response body.
    pub fn push_response(&self, body: Vec<u8>) {
        self.state.responses.lock().unwrap().push_back(Ok(body));
    }

    /// Queue a transport-style failure.
    pub fn push_error(&self) {
        self.state
            .responses
            .lock()
            .unwrap()
            .push_back(Err(FetchError::InvalidUrl {
                url: "mock".to_string(),
                reason: "scripted failure".to_string(),
            }));
    }

    /// Every `(query, page)` pair fetched so far.
    pub fn calls(&self) -> Vec<(String, u32)> {
        self.state.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.state.calls.lock().unwrap().len()
    }
}

impl MovieFetch for MockMovieClient {
    fn fetch(
        &self,
        query: &str,
        page: u32,
    ) -> impl Future<Output = Result<Vec<u8>, FetchError>> + Send {
        self.state
            .calls
            .lock()
            .unwrap()
            .push((query.to_string(), page));
        let next = self.state.responses.lock().unwrap().pop_front();

        async move {
            match next {
                Some(result) => result,
                None => Err(FetchError::InvalidUrl {
                    url: "mock".to_string(),
                    reason: "no scripted response left".to_string(),
                }),
            }
        }
    }
}

/// A realistic first page: 20 results, 6 pages total, "Batman" first.
pub fn movie_list_response() -> Vec<u8> {
    let mut results = vec![json!({
        "poster_path": "/kBf3g9crrADGMc2AMAMlLBgSm2h.jpg",
        "title": "Batman",
        "release_date": "1989-06-23",
        "overview": "The Dark Knight of Gotham City begins his war on crime.",
        "vote_average": 7.2
    })];

    for i in 1..20 {
        results.push(json!({
            "poster_path": format!("/poster{}.jpg", i),
            "title": format!("Batman {}", i),
            "release_date": "1992-06-19",
            "overview": format!("Entry number {} in the series.", i)
        }));
    }

    serde_json::to_vec(&json!({
        "page": 1,
        "total_pages": 6,
        "total_results": 106,
        "results": results
    }))
    .unwrap()
}

/// A small page with the given titles.
pub fn page_response(page: u32, total_pages: u32, titles: &[&str]) -> Vec<u8> {
    let results: Vec<_> = titles
        .iter()
        .map(|title| json!({ "title": title }))
        .collect();

    serde_json::to_vec(&json!({
        "page": page,
        "total_pages": total_pages,
        "results": results
    }))
    .unwrap()
}

/// A valid response with zero results.
pub fn empty_response() -> Vec<u8> {
    serde_json::to_vec(&json!({
        "page": 1,
        "total_pages": 1,
        "results": []
    }))
    .unwrap()
}
