/// One movie parsed from the API's result array. Any field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovieRecord {
    pub poster_path: Option<String>,
    pub title: Option<String>,
    pub release_date: Option<String>,
    pub overview: Option<String>,
}

/// Accumulated result state for one logical search.
///
/// `movies` grows monotonically as pagination continues; a new search
/// resets the whole page back to the default all-zero state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoviePage {
    pub movies: Vec<MovieRecord>,
    pub page_number: u32,
    pub total_pages: u32,
}

impl MoviePage {
    /// Reset to the empty pre-fetch state.
    pub fn reset(&mut self) {
        self.page_number = 0;
        self.total_pages = 0;
        self.movies.clear();
    }

    /// True when no further page should be fetched.
    ///
    /// Holds for the pristine `0 == 0` state as well, which is what makes
    /// a bare pagination call before any search a no-op.
    pub fn is_exhausted(&self) -> bool {
        self.page_number == self.total_pages
    }
}
