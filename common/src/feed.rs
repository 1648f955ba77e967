//! Assembly of the "recent reviews" feed shown under the review form.
//!
//! The API only lists reviews per movie, so the frontend fetches one batch per
//! movie and hands them here to be tagged with the movie title, merged and
//! ordered newest first.

use crate::model::review::Review;

/// Number of entries the feed shows.
pub const RECENT_REVIEW_LIMIT: usize = 10;

/// A review tagged with the title of the movie it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedEntry {
    pub movie_title: String,
    pub review: Review,
}

impl FeedEntry {
    /// `created_at` rendered as `YYYY-MM-DD HH:MM`.
    pub fn formatted_timestamp(&self) -> String {
        self.review.created_at.format("%Y-%m-%d %H:%M").to_string()
    }
}

/// Merges per-movie review batches into at most `limit` entries, newest first.
///
/// Each batch is `(movie title, reviews of that movie)`. Entries with equal
/// timestamps keep their batch order.
pub fn recent_reviews<I>(batches: I, limit: usize) -> Vec<FeedEntry>
where
    I: IntoIterator<Item = (String, Vec<Review>)>,
{
    let mut entries: Vec<FeedEntry> = batches
        .into_iter()
        .flat_map(|(movie_title, reviews)| {
            reviews.into_iter().map(move |review| FeedEntry {
                movie_title: movie_title.clone(),
                review,
            })
        })
        .collect();

    entries.sort_by(|a, b| b.review.created_at.cmp(&a.review.created_at));
    entries.truncate(limit);
    entries
}
