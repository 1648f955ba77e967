//! # Review Service Module
//!
//! Routes every request under `/api/reviews`:
//!
//! - `POST /`: `create::process`, 404 when the referenced movie does not exist.
//! - `GET /{movie_id}`: `list::process`, always 200, possibly with an empty array.
//! - `DELETE /{review_id}`: `delete::process`, 404 when absent.

mod create;
mod delete;
mod list;

use actix_web::web::{delete, get, post, scope};
use actix_web::Scope;
use common::model::review::Review;
use rusqlite::Row;

const API_PATH: &str = "/api/reviews";

pub(crate) const REVIEW_COLUMNS: &str = "id, movie_id, author, content, created_at, sentiment";

pub(crate) fn review_from_row(row: &Row<'_>) -> rusqlite::Result<Review> {
    Ok(Review {
        id: row.get(0)?,
        movie_id: row.get(1)?,
        author: row.get(2)?,
        content: row.get(3)?,
        created_at: row.get(4)?,
        sentiment: row.get(5)?,
    })
}

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", post().to(create::process))
        .route("/", post().to(create::process))
        .route("/{movie_id}", get().to(list::process))
        .route("/{review_id}", delete().to(delete::process))
}
