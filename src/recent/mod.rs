//! Persisted recent searches.
//!
//! [`RecentSearchStore`] is the bounded, timestamp-ordered store of past
//! query strings; [`SuggestionProvider`] projects it into display items
//! for the search field's suggestion list.

mod store;
mod suggestions;

pub use store::{RecentSearchEntry, RecentSearchStore, StoreError, MAX_RECENT};
pub use suggestions::{SuggestionItem, SuggestionProvider};
