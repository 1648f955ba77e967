use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A stored review row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: i64,
    pub movie_id: i64,
    pub author: String,
    pub content: String,
    /// UTC creation time assigned by the backend.
    pub created_at: NaiveDateTime,
    /// Reserved column. Nothing writes it, so it is always `null` on the wire.
    #[serde(default)]
    pub sentiment: Option<String>,
}
