pub mod movies;
pub mod reviews;
