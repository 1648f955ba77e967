use actix_web::http::StatusCode;
use actix_web::{test, App};
use backend::configure_api;
use backend::db::Database;
use common::model::message::{ErrorBody, Message};
use common::model::movie::Movie;
use common::model::review::Review;
use serde_json::json;
use tempfile::TempDir;

/// Fresh database file per test. The `TempDir` must outlive the app.
fn test_database() -> (TempDir, Database) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let database = Database::new(dir.path().join("movies.db"));
    database.init().expect("Failed to create schema");
    (dir, database)
}

fn count(database: &Database, table: &str) -> i64 {
    database
        .connect()
        .unwrap()
        .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| row.get(0))
        .unwrap()
}

#[actix_web::test]
async fn test_create_movie_then_list() {
    let (_dir, database) = test_database();
    let app = test::init_service(App::new().configure(configure_api(database))).await;

    let req = test::TestRequest::post()
        .uri("/api/movies/")
        .set_json(json!({
            "title": "Inception",
            "release_date": "2010-07-16",
            "director": "Christopher Nolan"
        }))
        .to_request();
    let created: Movie = test::call_and_read_body_json(&app, req).await;
    assert!(created.id > 0);
    assert_eq!(created.title, "Inception");
    assert_eq!(created.director.as_deref(), Some("Christopher Nolan"));
    assert_eq!(created.genre, None);

    let req = test::TestRequest::get().uri("/api/movies/").to_request();
    let movies: Vec<Movie> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(movies, vec![created]);
}

#[actix_web::test]
async fn test_collection_routes_without_trailing_slash() {
    let (_dir, database) = test_database();
    let app = test::init_service(App::new().configure(configure_api(database))).await;

    let req = test::TestRequest::post()
        .uri("/api/movies")
        .set_json(json!({ "title": "Heat" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get().uri("/api/movies").to_request();
    let movies: Vec<Movie> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(movies.len(), 1);
}

#[actix_web::test]
async fn test_release_date_is_stored_verbatim() {
    let (_dir, database) = test_database();
    let app = test::init_service(App::new().configure(configure_api(database))).await;

    let req = test::TestRequest::post()
        .uri("/api/movies/")
        .set_json(json!({ "title": "Heat", "release_date": "sometime in the 90s", "genre": "" }))
        .to_request();
    let created: Movie = test::call_and_read_body_json(&app, req).await;
    assert_eq!(created.release_date.as_deref(), Some("sometime in the 90s"));
    assert_eq!(created.genre.as_deref(), Some(""));
}

#[actix_web::test]
async fn test_get_movie_by_id() {
    let (_dir, database) = test_database();
    let app = test::init_service(App::new().configure(configure_api(database))).await;

    let req = test::TestRequest::post()
        .uri("/api/movies/")
        .set_json(json!({ "title": "Alien", "genre": "Horror" }))
        .to_request();
    let created: Movie = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::get()
        .uri(&format!("/api/movies/{}", created.id))
        .to_request();
    let fetched: Movie = test::call_and_read_body_json(&app, req).await;
    assert_eq!(fetched, created);

    let req = test::TestRequest::get().uri("/api/movies/9999").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: ErrorBody = test::read_body_json(resp).await;
    assert_eq!(body.detail, "Movie not found");
}

#[actix_web::test]
async fn test_review_round_trip_for_existing_movie() {
    let (_dir, database) = test_database();
    let app = test::init_service(App::new().configure(configure_api(database))).await;

    let req = test::TestRequest::post()
        .uri("/api/movies/")
        .set_json(json!({
            "title": "Inception",
            "release_date": "2010-07-16",
            "director": "Christopher Nolan"
        }))
        .to_request();
    let movie: Movie = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/api/reviews/")
        .set_json(json!({ "movie_id": movie.id, "author": "Alice", "content": "Great!" }))
        .to_request();
    let review: Review = test::call_and_read_body_json(&app, req).await;
    assert_eq!(review.movie_id, movie.id);
    assert_eq!(review.sentiment, None);

    let req = test::TestRequest::get()
        .uri(&format!("/api/reviews/{}", movie.id))
        .to_request();
    let reviews: Vec<Review> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0].author, "Alice");
    assert_eq!(reviews[0].content, "Great!");
    assert_eq!(reviews[0], review);
}

#[actix_web::test]
async fn test_review_json_exposes_reserved_sentiment_as_null() {
    let (_dir, database) = test_database();
    let app = test::init_service(App::new().configure(configure_api(database))).await;

    let req = test::TestRequest::post()
        .uri("/api/movies/")
        .set_json(json!({ "title": "Heat" }))
        .to_request();
    let movie: Movie = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/api/reviews/")
        .set_json(json!({ "movie_id": movie.id, "author": "Bob", "content": "Tense." }))
        .to_request();
    let raw: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert!(raw["sentiment"].is_null());
    assert!(raw["created_at"].is_string());
}

#[actix_web::test]
async fn test_review_for_unknown_movie_is_not_found() {
    let (_dir, database) = test_database();
    let app = test::init_service(App::new().configure(configure_api(database.clone()))).await;

    let req = test::TestRequest::post()
        .uri("/api/reviews/")
        .set_json(json!({ "movie_id": 404, "author": "Alice", "content": "Great!" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: ErrorBody = test::read_body_json(resp).await;
    assert_eq!(body.detail, "Movie not found");

    assert_eq!(count(&database, "reviews"), 0);
}

#[actix_web::test]
async fn test_list_reviews_without_reviews_is_empty() {
    let (_dir, database) = test_database();
    let app = test::init_service(App::new().configure(configure_api(database))).await;

    let req = test::TestRequest::post()
        .uri("/api/movies/")
        .set_json(json!({ "title": "Heat" }))
        .to_request();
    let movie: Movie = test::call_and_read_body_json(&app, req).await;

    for movie_id in [movie.id, 12345] {
        let req = test::TestRequest::get()
            .uri(&format!("/api/reviews/{movie_id}"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let reviews: Vec<Review> = test::read_body_json(resp).await;
        assert!(reviews.is_empty());
    }
}

#[actix_web::test]
async fn test_delete_movie_cascades_to_reviews() {
    let (_dir, database) = test_database();
    let app = test::init_service(App::new().configure(configure_api(database.clone()))).await;

    let mut movie_ids = Vec::new();
    for title in ["Inception", "Heat"] {
        let req = test::TestRequest::post()
            .uri("/api/movies/")
            .set_json(json!({ "title": title }))
            .to_request();
        let movie: Movie = test::call_and_read_body_json(&app, req).await;
        movie_ids.push(movie.id);
    }

    for (movie_id, author) in [(movie_ids[0], "Alice"), (movie_ids[0], "Bob"), (movie_ids[1], "Carol")] {
        let req = test::TestRequest::post()
            .uri("/api/reviews/")
            .set_json(json!({ "movie_id": movie_id, "author": author, "content": "..." }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let req = test::TestRequest::delete()
        .uri(&format!("/api/movies/{}", movie_ids[0]))
        .to_request();
    let message: Message = test::call_and_read_body_json(&app, req).await;
    assert_eq!(message.message, "Movie deleted");

    let req = test::TestRequest::get().uri("/api/movies/").to_request();
    let movies: Vec<Movie> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(movies.iter().map(|m| m.id).collect::<Vec<_>>(), vec![movie_ids[1]]);

    let req = test::TestRequest::get()
        .uri(&format!("/api/reviews/{}", movie_ids[0]))
        .to_request();
    let reviews: Vec<Review> = test::call_and_read_body_json(&app, req).await;
    assert!(reviews.is_empty());

    // Only Carol's review on the surviving movie is left.
    assert_eq!(count(&database, "reviews"), 1);
}

#[actix_web::test]
async fn test_delete_missing_ids_leaves_storage_unchanged() {
    let (_dir, database) = test_database();
    let app = test::init_service(App::new().configure(configure_api(database.clone()))).await;

    let req = test::TestRequest::post()
        .uri("/api/movies/")
        .set_json(json!({ "title": "Heat" }))
        .to_request();
    let movie: Movie = test::call_and_read_body_json(&app, req).await;
    let req = test::TestRequest::post()
        .uri("/api/reviews/")
        .set_json(json!({ "movie_id": movie.id, "author": "Alice", "content": "Great!" }))
        .to_request();
    let _: Review = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::delete().uri("/api/movies/9999").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::delete().uri("/api/reviews/9999").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: ErrorBody = test::read_body_json(resp).await;
    assert_eq!(body.detail, "Review not found");

    assert_eq!(count(&database, "movies"), 1);
    assert_eq!(count(&database, "reviews"), 1);
}

#[actix_web::test]
async fn test_delete_review() {
    let (_dir, database) = test_database();
    let app = test::init_service(App::new().configure(configure_api(database))).await;

    let req = test::TestRequest::post()
        .uri("/api/movies/")
        .set_json(json!({ "title": "Heat" }))
        .to_request();
    let movie: Movie = test::call_and_read_body_json(&app, req).await;

    let mut review_ids = Vec::new();
    for author in ["Alice", "Bob"] {
        let req = test::TestRequest::post()
            .uri("/api/reviews/")
            .set_json(json!({ "movie_id": movie.id, "author": author, "content": "..." }))
            .to_request();
        let review: Review = test::call_and_read_body_json(&app, req).await;
        review_ids.push(review.id);
    }

    let req = test::TestRequest::delete()
        .uri(&format!("/api/reviews/{}", review_ids[0]))
        .to_request();
    let message: Message = test::call_and_read_body_json(&app, req).await;
    assert_eq!(message.message, "Review deleted");

    let req = test::TestRequest::get()
        .uri(&format!("/api/reviews/{}", movie.id))
        .to_request();
    let reviews: Vec<Review> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0].id, review_ids[1]);
    assert_eq!(reviews[0].author, "Bob");
}

#[actix_web::test]
async fn test_large_inline_poster_url_is_accepted() {
    let (_dir, database) = test_database();
    let app = test::init_service(App::new().configure(configure_api(database))).await;

    let poster_url = format!("data:image/png;base64,{}", "A".repeat(100 * 1024));
    let req = test::TestRequest::post()
        .uri("/api/movies/")
        .set_json(json!({ "title": "Heat", "poster_url": poster_url }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let created: Movie = test::read_body_json(resp).await;
    assert_eq!(created.poster_url.as_deref(), Some(poster_url.as_str()));
}

#[actix_web::test]
async fn test_review_movie_id_as_numeric_string() {
    let (_dir, database) = test_database();
    let app = test::init_service(App::new().configure(configure_api(database))).await;

    let req = test::TestRequest::post()
        .uri("/api/movies/")
        .set_json(json!({ "title": "Heat" }))
        .to_request();
    let movie: Movie = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/api/reviews/")
        .set_json(json!({ "movie_id": movie.id.to_string(), "author": "Alice", "content": "Great!" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let review: Review = test::read_body_json(resp).await;
    assert_eq!(review.movie_id, movie.id);
}

#[actix_web::test]
async fn test_non_integer_ids_are_json_not_found() {
    let (_dir, database) = test_database();
    let app = test::init_service(App::new().configure(configure_api(database))).await;

    let requests = [
        test::TestRequest::get().uri("/api/movies/abc").to_request(),
        test::TestRequest::delete().uri("/api/movies/abc").to_request(),
        test::TestRequest::get().uri("/api/reviews/abc").to_request(),
        test::TestRequest::delete().uri("/api/reviews/abc").to_request(),
    ];
    for req in requests {
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: ErrorBody = test::read_body_json(resp).await;
        assert_eq!(body.detail, "Resource not found");
    }
}
