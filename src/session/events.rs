/// Events a [`SearchSession`](super::SearchSession) emits to its consumer.
///
/// The presentation layer subscribes to these instead of handing the
/// session closures; delivery over the channel moves completions onto
/// whatever task the consumer receives on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    /// The accumulated item list changed; re-read and redraw.
    ResultsChanged,
    /// A fetch or parse failed. Carries the generic technical message.
    SearchFailed { message: String },
    /// The response was valid but held zero results for this query.
    NoResults { query: String },
    /// Persisted recent searches exist; the suggestion list can be shown.
    RecentSearchesAvailable,
}

/// Generic message for network and parse failures. Both surface the
/// same text; the distinction only matters in logs.
pub const TECHNICAL_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

/// Query-specific message for an empty result set.
pub fn no_results_message(query: &str) -> String {
    format!("No results found for '{}'", query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_results_message_names_the_query() {
        assert_eq!(
            no_results_message("Batman"),
            "No results found for 'Batman'"
        );
    }
}
