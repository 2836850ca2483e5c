use crate::movies::model::MovieRecord;

/// View-ready projection of one [`MovieRecord`].
///
/// Every field has a display default, so the derivation is total: absent
/// titles and overviews become empty strings, an absent release date
/// becomes `"--"`, and the poster URL exists only when the record carries
/// a poster path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieListItem {
    pub poster_url: Option<String>,
    pub name_text: String,
    pub release_date_text: String,
    pub overview_text: String,
}

impl MovieListItem {
    /// Derive a display item from a record.
    pub fn from_record(movie: &MovieRecord, poster_base_url: &str) -> Self {
        let poster_url = movie
            .poster_path
            .as_deref()
            .map(|path| format!("{}{}", poster_base_url, path));

        Self {
            poster_url,
            name_text: movie.title.clone().unwrap_or_default(),
            release_date_text: movie
                .release_date
                .clone()
                .unwrap_or_else(|| "--".to_string()),
            overview_text: movie.overview.clone().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const POSTER_BASE: &str = "https://image.example.com/w92";

    #[test]
    fn derives_all_fields_when_present() {
        let record = MovieRecord {
            poster_path: Some("/kBf3g9crrADGMc2AMAMlLBgSm2h.jpg".to_string()),
            title: Some("Batman".to_string()),
            release_date: Some("1989-06-23".to_string()),
            overview: Some("The Dark Knight of Gotham City.".to_string()),
        };

        let item = MovieListItem::from_record(&record, POSTER_BASE);
        assert_eq!(item.name_text, "Batman");
        assert_eq!(item.release_date_text, "1989-06-23");
        assert_eq!(item.overview_text, "The Dark Knight of Gotham City.");
        assert_eq!(
            item.poster_url.as_deref(),
            Some("https://image.example.com/w92/kBf3g9crrADGMc2AMAMlLBgSm2h.jpg")
        );
    }

    #[test]
    fn absent_fields_fall_back_to_display_defaults() {
        let item = MovieListItem::from_record(&MovieRecord::default(), POSTER_BASE);
        assert_eq!(item.name_text, "");
        assert_eq!(item.release_date_text, "--");
        assert_eq!(item.overview_text, "");
        assert!(item.poster_url.is_none());
    }

    #[test]
    fn poster_url_concatenates_base_and_path() {
        let record = MovieRecord {
            poster_path: Some("/p.jpg".to_string()),
            ..MovieRecord::default()
        };

        let item = MovieListItem::from_record(&record, POSTER_BASE);
        assert_eq!(
            item.poster_url.as_deref(),
            Some("https://image.example.com/w92/p.jpg")
        );
    }
}
