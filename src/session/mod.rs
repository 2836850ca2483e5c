//! Search session orchestration.
//!
//! A [`SearchSession`] owns the state of one logical search: the current
//! query, the accumulated [`MoviePage`], and the derived list of
//! [`MovieListItem`]s. It decides new-search versus next-page, guards
//! against fetching past the last page, records successful new searches
//! into the recent store, and reports every outcome as a [`SearchEvent`].

mod events;

pub use events::{no_results_message, SearchEvent, TECHNICAL_ERROR_MESSAGE};

use tokio::sync::mpsc::UnboundedSender;

use crate::client::MovieFetch;
use crate::movies::{parse_search_response, MovieListItem, MoviePage, MovieRecord};
use crate::recent::RecentSearchStore;

/// Controller for one search session.
///
/// `search` takes `&mut self`, so overlapping fetches for the same
/// session cannot start: a second call waits for exclusive access. All
/// state mutation happens after the fetch completes, which also means a
/// session future dropped mid-fetch leaves the state untouched.
pub struct SearchSession<C> {
    client: C,
    store: RecentSearchStore,
    poster_base_url: String,
    events: UnboundedSender<SearchEvent>,
    last_search: String,
    page: MoviePage,
    items: Vec<MovieListItem>,
}

impl<C: MovieFetch> SearchSession<C> {
    /// Create a session over a fetch client and recent-search store.
    ///
    /// The store handle is injected here rather than reached for
    /// globally; the session is its only writer.
    pub fn new(
        client: C,
        store: RecentSearchStore,
        poster_base_url: String,
        events: UnboundedSender<SearchEvent>,
    ) -> Self {
        Self {
            client,
            store,
            poster_base_url,
            events,
            last_search: String::new(),
            page: MoviePage::default(),
            items: Vec::new(),
        }
    }

    /// The query the session is currently accumulating results for.
    pub fn last_search(&self) -> &str {
        &self.last_search
    }

    /// Accumulated page state.
    pub fn page(&self) -> &MoviePage {
        &self.page
    }

    /// Derived display items over every accumulated movie.
    pub fn items(&self) -> &[MovieListItem] {
        &self.items
    }

    /// Run a search or a pagination continuation.
    ///
    /// - `query`, when given, replaces the session's current query;
    ///   pagination callers pass `None` to reuse it.
    /// - `new_search` resets the accumulated state before fetching.
    /// - A continuation on an exhausted page (including the pristine
    ///   state before any fetch) is a no-op.
    ///
    /// Failures never mutate state: a fetch or parse error emits
    /// [`SearchEvent::SearchFailed`], an empty result set emits
    /// [`SearchEvent::NoResults`], and in both cases the page and items
    /// are exactly as before the call.
    pub async fn search(&mut self, query: Option<&str>, new_search: bool) {
        if let Some(query) = query {
            self.last_search = query.to_string();
        }

        if new_search {
            self.reset_page();
            self.reset_items();
        } else if self.page.is_exhausted() {
            return;
        }

        let next_page = self.page.page_number + 1;
        match self.client.fetch(&self.last_search, next_page).await {
            Ok(bytes) => self.apply_response(&bytes, new_search),
            Err(e) => {
                tracing::warn!(query = %self.last_search, page = next_page, error = %e, "Fetch failed");
                self.emit(SearchEvent::SearchFailed {
                    message: TECHNICAL_ERROR_MESSAGE.to_string(),
                });
            }
        }
    }

    /// Emit [`SearchEvent::RecentSearchesAvailable`] when the store has
    /// entries. Called when the search field gains focus.
    pub fn activate_search_field(&self) {
        match self.store.is_non_empty() {
            Ok(true) => self.emit(SearchEvent::RecentSearchesAvailable),
            Ok(false) => {}
            Err(e) => tracing::warn!(error = %e, "Could not read recent-search store"),
        }
    }

    /// Reset the page state to `page_number = 0, total_pages = 0`,
    /// no movies.
    pub fn reset_page(&mut self) {
        self.page.reset();
    }

    /// Clear the derived display items.
    pub fn reset_items(&mut self) {
        self.items.clear();
    }

    /// Merge a successful response into the session.
    fn apply_response(&mut self, bytes: &[u8], new_search: bool) {
        let response = match parse_search_response(bytes) {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(query = %self.last_search, error = %e, "Unparseable search response");
                self.emit(SearchEvent::SearchFailed {
                    message: TECHNICAL_ERROR_MESSAGE.to_string(),
                });
                return;
            }
        };

        if response.results.is_empty() {
            self.emit(SearchEvent::NoResults {
                query: self.last_search.clone(),
            });
            return;
        }

        if new_search {
            self.record_recent_search();
        }

        self.page
            .movies
            .extend(response.results.into_iter().map(MovieRecord::from));
        self.page.page_number = response.page;
        self.page.total_pages = response.total_pages;

        self.rebuild_items();
        self.emit(SearchEvent::ResultsChanged);
    }

    /// Re-derive the full item list from every accumulated movie.
    ///
    /// Recomputing from scratch instead of appending the delta keeps the
    /// published list consistent no matter how pages arrived.
    fn rebuild_items(&mut self) {
        self.items = self
            .page
            .movies
            .iter()
            .map(|movie| MovieListItem::from_record(movie, &self.poster_base_url))
            .collect();
    }

    /// Upsert the current query into the recent store.
    ///
    /// Persistence failures are logged and swallowed; they must never
    /// stop the in-memory search flow.
    fn record_recent_search(&self) {
        if let Err(e) = self.store.upsert(&self.last_search) {
            tracing::warn!(query = %self.last_search, error = %e, "Could not persist recent search");
        }
    }

    fn emit(&self, event: SearchEvent) {
        // A dropped receiver just means nobody is listening anymore.
        let _ = self.events.send(event);
    }
}
