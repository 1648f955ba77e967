use common::feed::FeedEntry;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ReviewFeedProps {
    /// Already merged and sorted, newest first.
    pub entries: Vec<FeedEntry>,
    pub has_movies: bool,
    pub on_delete: Callback<i64>,
}

/// The most recent reviews across all movies.
pub struct ReviewFeed;

impl Component for ReviewFeed {
    type Message = ();
    type Properties = ReviewFeedProps;

    fn create(_ctx: &Context<Self>) -> Self {
        ReviewFeed
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        if !props.has_movies {
            return html! {
                <div class="banner info">
                    {"There are no movies yet, so there are no reviews to show."}
                </div>
            };
        }
        if props.entries.is_empty() {
            return html! { <p class="muted">{"No reviews yet."}</p> };
        }

        html! {
            <div class="review-feed">
                { for props.entries.iter().map(|entry| feed_entry(entry, &props.on_delete)) }
            </div>
        }
    }
}

fn feed_entry(entry: &FeedEntry, on_delete: &Callback<i64>) -> Html {
    let id = entry.review.id;
    let onclick = on_delete.reform(move |_: MouseEvent| id);

    html! {
        <div class="feed-entry" key={id.to_string()}>
            <p>
                <strong>{ entry.movie_title.clone() }</strong>
                { format!(" - {} ({})", entry.review.author, entry.formatted_timestamp()) }
            </p>
            <p>{ entry.review.content.clone() }</p>
            <button type="button" class="icon-btn" title="Delete review" {onclick}>{"Delete"}</button>
            <hr />
        </div>
    }
}
