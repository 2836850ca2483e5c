//! Domain model for search results.
//!
//! [`MoviePage`] accumulates raw [`MovieRecord`]s across pagination,
//! [`SearchResponse`] is the wire shape of one results page, and
//! [`MovieListItem`] is the view-ready projection of a record.

mod item;
mod model;
mod response;

pub use item::MovieListItem;
pub use model::{MoviePage, MovieRecord};
pub use response::{parse_search_response, ParseError, ResultEntry, SearchResponse};
