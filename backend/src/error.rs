use actix_web::error::BlockingError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use common::model::message::ErrorBody;
use log::error;
use thiserror::Error;

/// Errors returned by the API handlers.
///
/// Only `NotFound` reaches the client verbatim; storage and thread-pool failures
/// are logged and answered with a generic 500.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("blocking task failed: {0}")]
    Blocking(#[from] BlockingError),
}

impl ApiError {
    pub fn movie_not_found() -> Self {
        ApiError::NotFound("Movie")
    }

    pub fn review_not_found() -> Self {
        ApiError::NotFound("Review")
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Database(_) | ApiError::Blocking(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let detail = match self {
            ApiError::NotFound(_) => self.to_string(),
            ApiError::Database(_) | ApiError::Blocking(_) => {
                error!("{}", self);
                "Internal server error".to_string()
            }
        };
        HttpResponse::build(self.status_code()).json(ErrorBody { detail })
    }
}
