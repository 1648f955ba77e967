//! Thin client for the backend's `/api` routes.
//!
//! The frontend is served by the backend itself, so every request is
//! same-origin and only carries the path. Non-2xx answers are turned into
//! [`FetchError::Status`] with the server's `detail` message.

use common::model::message::{ErrorBody, Message};
use common::model::movie::Movie;
use common::model::review::Review;
use common::requests::{NewMovie, NewReview};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;

const API_PATH: &str = "/api";

#[derive(Debug, Clone, Error)]
pub enum FetchError {
    /// The request never produced a usable response (server down, bad JSON, ...).
    #[error("Request failed: {0}")]
    Transport(String),
    #[error("{detail} (HTTP {status})")]
    Status { status: u16, detail: String },
}

impl From<gloo_net::Error> for FetchError {
    fn from(err: gloo_net::Error) -> Self {
        FetchError::Transport(err.to_string())
    }
}

async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T, FetchError> {
    if !resp.ok() {
        let status = resp.status();
        let detail = match resp.json::<ErrorBody>().await {
            Ok(body) => body.detail,
            Err(_) => resp.status_text(),
        };
        return Err(FetchError::Status { status, detail });
    }
    Ok(resp.json::<T>().await?)
}

pub async fn fetch_movies() -> Result<Vec<Movie>, FetchError> {
    let resp = Request::get(&format!("{API_PATH}/movies/")).send().await?;
    read_json(resp).await
}

pub async fn create_movie(payload: &NewMovie) -> Result<Movie, FetchError> {
    let resp = Request::post(&format!("{API_PATH}/movies/"))
        .json(payload)?
        .send()
        .await?;
    read_json(resp).await
}

pub async fn delete_movie(movie_id: i64) -> Result<Message, FetchError> {
    let resp = Request::delete(&format!("{API_PATH}/movies/{movie_id}"))
        .send()
        .await?;
    read_json(resp).await
}

pub async fn fetch_reviews(movie_id: i64) -> Result<Vec<Review>, FetchError> {
    let resp = Request::get(&format!("{API_PATH}/reviews/{movie_id}"))
        .send()
        .await?;
    read_json(resp).await
}

pub async fn create_review(payload: &NewReview) -> Result<Review, FetchError> {
    let resp = Request::post(&format!("{API_PATH}/reviews/"))
        .json(payload)?
        .send()
        .await?;
    read_json(resp).await
}

pub async fn delete_review(review_id: i64) -> Result<Message, FetchError> {
    let resp = Request::delete(&format!("{API_PATH}/reviews/{review_id}"))
        .send()
        .await?;
    read_json(resp).await
}
