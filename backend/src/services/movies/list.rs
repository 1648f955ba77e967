use crate::db::Database;
use crate::error::ApiError;
use actix_web::{web, HttpResponse};
use common::model::movie::Movie;

use super::{movie_from_row, MOVIE_COLUMNS};

/// Actix web handler for `GET /api/movies/`.
pub async fn process(db: web::Data<Database>) -> Result<HttpResponse, ApiError> {
    let movies = web::block(move || list_movies(&db)).await??;
    Ok(HttpResponse::Ok().json(movies))
}

/// Returns every movie in id order. Unpaginated.
pub fn list_movies(db: &Database) -> Result<Vec<Movie>, ApiError> {
    let conn = db.connect()?;
    let mut stmt = conn.prepare(&format!("SELECT {MOVIE_COLUMNS} FROM movies ORDER BY id"))?;
    let movies = stmt
        .query_map([], movie_from_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(movies)
}
