use crate::db::Database;
use crate::error::ApiError;
use actix_web::{web, HttpResponse};
use common::model::review::Review;
use rusqlite::params;

use super::{review_from_row, REVIEW_COLUMNS};

/// Actix web handler for `GET /api/reviews/{movie_id}`.
///
/// An unknown movie is not an error here: it simply has no reviews.
pub async fn process(
    db: web::Data<Database>,
    movie_id: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let movie_id = movie_id.into_inner();
    let reviews = web::block(move || list_reviews(&db, movie_id)).await??;
    Ok(HttpResponse::Ok().json(reviews))
}

pub fn list_reviews(db: &Database, movie_id: i64) -> Result<Vec<Review>, ApiError> {
    let conn = db.connect()?;
    let mut stmt = conn.prepare(&format!(
        "SELECT {REVIEW_COLUMNS} FROM reviews WHERE movie_id = ?1 ORDER BY id"
    ))?;
    let reviews = stmt
        .query_map(params![movie_id], review_from_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(reviews)
}
