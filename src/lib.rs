//! Movie search client with paginated search sessions and a persisted
//! recent-search list.
//!
//! The crate is organized around a [`session::SearchSession`] that owns the
//! state of one logical search: it drives the [`client::MovieFetch`] seam,
//! accumulates paginated results into a [`movies::MoviePage`], derives
//! view-ready [`movies::MovieListItem`]s, and records successful new
//! searches into the [`recent::RecentSearchStore`]. The session reports
//! outcomes to its consumer through a typed [`session::SearchEvent`]
//! channel rather than closures bound to any particular UI.

pub mod client;
pub mod config;
pub mod movies;
pub mod recent;
pub mod session;
