use serde::{Deserialize, Deserializer, Serialize};

/// Request payload for `POST /api/movies/`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewMovie {
    pub title: String,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub director: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub poster_url: Option<String>,
}

/// Request payload for `POST /api/reviews/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewReview {
    #[serde(deserialize_with = "id_from_number_or_string")]
    pub movie_id: i64,
    pub author: String,
    pub content: String,
}

/// Accepts an id as a JSON integer or as a string holding one (`"1"`).
fn id_from_number_or_string<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Number(i64),
        Text(String),
    }

    match RawId::deserialize(deserializer)? {
        RawId::Number(id) => Ok(id),
        RawId::Text(text) => text
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid id: {text:?}"))),
    }
}

/// Maps a form input to an optional column: blank input means "not given".
pub fn optional_text(input: &str) -> Option<String> {
    if input.trim().is_empty() {
        None
    } else {
        Some(input.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_input_is_none() {
        assert_eq!(optional_text(""), None);
        assert_eq!(optional_text("  "), None);
        assert_eq!(optional_text("2010-07-16"), Some("2010-07-16".to_string()));
    }

    #[test]
    fn review_movie_id_accepts_numeric_strings() {
        let from_number: NewReview =
            serde_json::from_str(r#"{"movie_id":1,"author":"Alice","content":"Great!"}"#).unwrap();
        let from_string: NewReview =
            serde_json::from_str(r#"{"movie_id":"1","author":"Alice","content":"Great!"}"#).unwrap();
        assert_eq!(from_number, from_string);
        assert_eq!(from_string.movie_id, 1);

        let bad = serde_json::from_str::<NewReview>(r#"{"movie_id":"one","author":"a","content":"b"}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn new_movie_accepts_title_only() {
        let payload: NewMovie = serde_json::from_str(r#"{"title":"Inception"}"#).unwrap();
        assert_eq!(payload.title, "Inception");
        assert_eq!(payload.release_date, None);
        assert_eq!(payload.poster_url, None);
    }
}
