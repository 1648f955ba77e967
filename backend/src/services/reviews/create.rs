use crate::db::Database;
use crate::error::ApiError;
use crate::services::movies::find_movie;
use actix_web::{web, HttpResponse};
use chrono::Utc;
use common::model::review::Review;
use common::requests::NewReview;
use log::{info, warn};
use rusqlite::params;

use super::{review_from_row, REVIEW_COLUMNS};

/// Actix web handler for `POST /api/reviews/`.
///
/// # Returns
/// - `200 OK` with the stored `Review`, including its server-assigned `created_at`.
/// - `404 Not Found` with `{"detail": "Movie not found"}` if `movie_id` is unknown.
pub async fn process(
    db: web::Data<Database>,
    payload: web::Json<NewReview>,
) -> Result<HttpResponse, ApiError> {
    let payload = payload.into_inner();
    let review = web::block(move || create_review(&db, &payload)).await??;
    info!("Created review {} for movie {}", review.id, review.movie_id);
    Ok(HttpResponse::Ok().json(review))
}

/// Inserts a review after checking its movie exists. The check and the insert
/// share one transaction so the movie cannot vanish in between.
pub fn create_review(db: &Database, payload: &NewReview) -> Result<Review, ApiError> {
    let mut conn = db.connect()?;
    let tx = conn.transaction()?;

    if find_movie(&tx, payload.movie_id)?.is_none() {
        warn!("Rejected review for unknown movie {}", payload.movie_id);
        return Err(ApiError::movie_not_found());
    }

    tx.execute(
        "INSERT INTO reviews (movie_id, author, content, created_at) VALUES (?1, ?2, ?3, ?4)",
        params![
            payload.movie_id,
            &payload.author,
            &payload.content,
            Utc::now().naive_utc(),
        ],
    )?;
    let id = tx.last_insert_rowid();

    let review = tx.query_row(
        &format!("SELECT {REVIEW_COLUMNS} FROM reviews WHERE id = ?1"),
        params![id],
        review_from_row,
    )?;
    tx.commit()?;
    Ok(review)
}
