use common::model::movie::{display_or_dash, Movie};
use yew::prelude::*;

use crate::movie_grid::MovieGrid;

const GALLERY_COLUMNS: usize = 3;

#[derive(Properties, PartialEq)]
pub struct MovieGalleryProps {
    pub movies: Vec<Movie>,
    /// Receives the id of the movie whose delete button was pressed.
    pub on_delete: Callback<i64>,
}

/// Every stored movie as a card in a three-column grid.
pub struct MovieGallery;

impl Component for MovieGallery {
    type Message = ();
    type Properties = MovieGalleryProps;

    fn create(_ctx: &Context<Self>) -> Self {
        MovieGallery
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        if props.movies.is_empty() {
            return html! { <p class="muted">{"No movies yet."}</p> };
        }

        html! {
            <MovieGrid columns={GALLERY_COLUMNS}>
                { for props.movies.iter().map(|movie| movie_card(movie, &props.on_delete)) }
            </MovieGrid>
        }
    }
}

fn movie_card(movie: &Movie, on_delete: &Callback<i64>) -> Html {
    let id = movie.id;
    let onclick = on_delete.reform(move |_: MouseEvent| id);

    html! {
        <div class="movie-card" key={id.to_string()}>
            <img src={movie.poster_or_placeholder().to_string()} width="150" alt={movie.title.clone()} />
            <p><strong>{ movie.title.clone() }</strong></p>
            <p>{ format!("Release date: {}", display_or_dash(movie.release_date.as_deref())) }</p>
            <p>{ format!("Director: {}", display_or_dash(movie.director.as_deref())) }</p>
            <p>{ format!("Genre: {}", display_or_dash(movie.genre.as_deref())) }</p>
            <button type="button" class="icon-btn" title="Delete movie" {onclick}>{"Delete"}</button>
            <hr />
        </div>
    }
}
