use crate::db::Database;
use crate::error::ApiError;
use actix_web::{web, HttpResponse};
use common::model::movie::Movie;
use log::warn;
use rusqlite::{params, Connection, OptionalExtension};

use super::{movie_from_row, MOVIE_COLUMNS};

/// Actix web handler for `GET /api/movies/{movie_id}`.
///
/// # Returns
/// - `200 OK` with the `Movie` as JSON.
/// - `404 Not Found` with `{"detail": "Movie not found"}` when no row has that id.
pub async fn process(
    db: web::Data<Database>,
    movie_id: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let movie_id = movie_id.into_inner();
    let movie = web::block(move || get_movie(&db, movie_id)).await??;
    Ok(HttpResponse::Ok().json(movie))
}

pub fn get_movie(db: &Database, movie_id: i64) -> Result<Movie, ApiError> {
    let conn = db.connect()?;
    find_movie(&conn, movie_id)?.ok_or_else(|| {
        warn!("Movie {} not found", movie_id);
        ApiError::movie_not_found()
    })
}

/// Looks a movie up on an already open connection.
pub(crate) fn find_movie(conn: &Connection, movie_id: i64) -> rusqlite::Result<Option<Movie>> {
    conn.query_row(
        &format!("SELECT {MOVIE_COLUMNS} FROM movies WHERE id = ?1"),
        params![movie_id],
        movie_from_row,
    )
    .optional()
}
