use crate::recent::store::{RecentSearchStore, StoreError};

/// One row of the suggestion list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionItem {
    pub search_text: String,
}

/// Loads and formats persisted recent searches for the suggestion list.
///
/// Holds a snapshot: [`load`](Self::load) is called when the search
/// field gains focus, and [`select`](Self::select) hands the chosen
/// query back to the caller to start a new search with.
pub struct SuggestionProvider {
    store: RecentSearchStore,
    items: Vec<SuggestionItem>,
}

impl SuggestionProvider {
    pub fn new(store: RecentSearchStore) -> Self {
        Self {
            store,
            items: Vec::new(),
        }
    }

    /// Refresh the snapshot from the store, most recent first.
    ///
    /// The store lists ascending by timestamp, so the order is reversed
    /// here for display.
    pub fn load(&mut self) -> Result<(), StoreError> {
        let entries = self.store.list_ordered_by_recency()?;
        self.items = entries
            .into_iter()
            .rev()
            .map(|entry| SuggestionItem {
                search_text: entry.movie_name,
            })
            .collect();
        Ok(())
    }

    /// The current snapshot.
    pub fn items(&self) -> &[SuggestionItem] {
        &self.items
    }

    /// The query text at `index`, to feed back into a new search.
    pub fn select(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(|item| item.search_text.as_str())
    }
}
