use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Image shown in the gallery when a movie has no poster.
pub const POSTER_PLACEHOLDER_URL: &str = "https://via.placeholder.com/150";

/// A stored movie row, as returned by every `/api/movies` endpoint.
///
/// `release_date` is free text: the backend stores whatever the client sent
/// without checking that it is a real date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub release_date: Option<String>,
    pub director: Option<String>,
    pub genre: Option<String>,
    pub poster_url: Option<String>,
}

impl Movie {
    /// The poster URL, or [`POSTER_PLACEHOLDER_URL`] when it is missing or blank.
    pub fn poster_or_placeholder(&self) -> &str {
        match self.poster_url.as_deref() {
            Some(url) if !url.trim().is_empty() => url,
            _ => POSTER_PLACEHOLDER_URL,
        }
    }
}

/// Renders an optional text column, falling back to `-`.
pub fn display_or_dash(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => "-",
    }
}

/// One entry of the review form's movie selector.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieOption {
    pub id: i64,
    pub label: String,
}

/// Builds selector entries keyed by movie id.
///
/// Titles are not unique, so a title shared by several movies gets its id
/// appended to the label to keep the entries distinguishable.
pub fn movie_options(movies: &[Movie]) -> Vec<MovieOption> {
    let mut title_counts: HashMap<&str, usize> = HashMap::new();
    for movie in movies {
        *title_counts.entry(movie.title.as_str()).or_default() += 1;
    }

    movies
        .iter()
        .map(|movie| {
            let label = if title_counts[movie.title.as_str()] > 1 {
                format!("{} (#{})", movie.title, movie.id)
            } else {
                movie.title.clone()
            };
            MovieOption {
                id: movie.id,
                label,
            }
        })
        .collect()
}
