use crate::db::Database;
use crate::error::ApiError;
use actix_web::{web, HttpResponse};
use common::model::movie::Movie;
use common::requests::NewMovie;
use log::info;
use rusqlite::params;

use super::find_movie;

/// Actix web handler for `POST /api/movies/`.
///
/// Fields are stored exactly as received; `release_date` in particular is
/// free text and is not parsed.
pub async fn process(
    db: web::Data<Database>,
    payload: web::Json<NewMovie>,
) -> Result<HttpResponse, ApiError> {
    let payload = payload.into_inner();
    let movie = web::block(move || create_movie(&db, &payload)).await??;
    info!("Created movie {} ({})", movie.id, movie.title);
    Ok(HttpResponse::Ok().json(movie))
}

/// Inserts a movie row and reads it back with its assigned id.
pub fn create_movie(db: &Database, payload: &NewMovie) -> Result<Movie, ApiError> {
    let conn = db.connect()?;
    conn.execute(
        "INSERT INTO movies (title, release_date, director, genre, poster_url) VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            &payload.title,
            &payload.release_date,
            &payload.director,
            &payload.genre,
            &payload.poster_url,
        ],
    )?;

    let id = conn.last_insert_rowid();
    find_movie(&conn, id)?.ok_or_else(ApiError::movie_not_found)
}
