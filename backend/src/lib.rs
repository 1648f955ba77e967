//! Backend of the movie archive: a JSON API over a SQLite file holding
//! movies and their reviews.

pub mod config;
pub mod db;
pub mod error;
pub mod services;

use actix_web::web;
use db::Database;
use error::ApiError;

/// Poster URLs may be inline data URLs.
const JSON_LIMIT: usize = 10 * 1024 * 1024;

/// Registers the API routes and their shared state on an actix `App`.
///
/// Used by `main.rs` and by the integration tests, so both run the same
/// route table.
pub fn configure_api(database: Database) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg: &mut web::ServiceConfig| {
        cfg.app_data(web::JsonConfig::default().limit(JSON_LIMIT))
            // Ids that do not parse as integers cannot name a row.
            .app_data(
                web::PathConfig::default()
                    .error_handler(|_err, _req| ApiError::NotFound("Resource").into()),
            )
            .app_data(web::Data::new(database))
            .service(services::movies::configure_routes())
            .service(services::reviews::configure_routes());
    }
}
