//! HTTP services of the movie archive API.
//!
//! - `movies`: create, list, fetch and delete movies under `/api/movies`.
//! - `reviews`: create, list per movie and delete reviews under `/api/reviews`.

pub mod movies;
pub mod reviews;
