use crate::db::Database;
use crate::error::ApiError;
use actix_web::{web, HttpResponse};
use common::model::message::Message;
use log::{info, warn};
use rusqlite::params;

/// Actix web handler for `DELETE /api/reviews/{review_id}`.
pub async fn process(
    db: web::Data<Database>,
    review_id: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let review_id = review_id.into_inner();
    web::block(move || delete_review(&db, review_id)).await??;
    info!("Deleted review {}", review_id);
    Ok(HttpResponse::Ok().json(Message::new("Review deleted")))
}

pub fn delete_review(db: &Database, review_id: i64) -> Result<(), ApiError> {
    let conn = db.connect()?;
    let deleted = conn.execute("DELETE FROM reviews WHERE id = ?1", params![review_id])?;
    if deleted == 0 {
        warn!("Review {} not found", review_id);
        return Err(ApiError::review_not_found());
    }
    Ok(())
}
