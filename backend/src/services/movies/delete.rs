use crate::db::Database;
use crate::error::ApiError;
use actix_web::{web, HttpResponse};
use common::model::message::Message;
use log::{info, warn};
use rusqlite::params;

/// Actix web handler for `DELETE /api/movies/{movie_id}`.
pub async fn process(
    db: web::Data<Database>,
    movie_id: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let movie_id = movie_id.into_inner();
    web::block(move || delete_movie(&db, movie_id)).await??;
    info!("Deleted movie {} and its reviews", movie_id);
    Ok(HttpResponse::Ok().json(Message::new("Movie deleted")))
}

/// Deletes a movie. The `ON DELETE CASCADE` on `reviews.movie_id` removes its
/// reviews in the same statement.
pub fn delete_movie(db: &Database, movie_id: i64) -> Result<(), ApiError> {
    let conn = db.connect()?;
    let deleted = conn.execute("DELETE FROM movies WHERE id = ?1", params![movie_id])?;
    if deleted == 0 {
        warn!("Movie {} not found", movie_id);
        return Err(ApiError::movie_not_found());
    }
    Ok(())
}
