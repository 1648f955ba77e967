//! # Movie Service Module
//!
//! Routes every request under `/api/movies` to its handler. Each sub-module owns
//! one endpoint: the actix handler (`process`) plus the blocking storage function
//! it runs on actix's thread pool.
//!
//! ## Sub-modules:
//! - `create`: inserts a movie and returns the stored row.
//! - `list`: returns every movie in storage order.
//! - `get`: returns a single movie by id.
//! - `delete`: removes a movie; its reviews go with it through the foreign key cascade.

mod create;
mod delete;
mod get;
mod list;

pub(crate) use get::find_movie;

use actix_web::web::{delete, get, post, scope};
use actix_web::Scope;
use common::model::movie::Movie;
use rusqlite::Row;

/// The base path for all movie endpoints.
const API_PATH: &str = "/api/movies";

/// Column list shared by every query that materializes a [`Movie`].
pub(crate) const MOVIE_COLUMNS: &str = "id, title, release_date, director, genre, poster_url";

/// Maps a row selected with [`MOVIE_COLUMNS`] to a [`Movie`].
pub(crate) fn movie_from_row(row: &Row<'_>) -> rusqlite::Result<Movie> {
    Ok(Movie {
        id: row.get(0)?,
        title: row.get(1)?,
        release_date: row.get(2)?,
        director: row.get(3)?,
        genre: row.get(4)?,
        poster_url: row.get(5)?,
    })
}

/// Configures and returns the Actix `Scope` for all movie routes.
///
/// # Registered Routes:
///
/// *   **`POST /`**: `create::process`, body is a `NewMovie`.
/// *   **`GET /`**: `list::process`.
/// *   **`GET /{movie_id}`**: `get::process`, 404 when absent.
/// *   **`DELETE /{movie_id}`**: `delete::process`, 404 when absent.
///
/// Collection routes answer with and without the trailing slash.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", post().to(create::process))
        .route("/", post().to(create::process))
        .route("", get().to(list::process))
        .route("/", get().to(list::process))
        .route("/{movie_id}", get().to(get::process))
        .route("/{movie_id}", delete().to(delete::process))
}
