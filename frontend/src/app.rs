//! Root component.
//!
//! Owns the last fetched movie list and review feed and re-fetches both after
//! every change (a saved form or a delete). There is no client-side cache:
//! each refresh asks the backend for the full movie list, then for each
//! movie's reviews, and rebuilds the feed from scratch.

use common::feed::{recent_reviews, FeedEntry, RECENT_REVIEW_LIMIT};
use common::model::movie::Movie;
use gloo_console::{error, warn};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::{self, FetchError};
use crate::components::movies::form::MovieFormComponent;
use crate::components::movies::gallery::MovieGallery;
use crate::components::reviews::feed::ReviewFeed;
use crate::components::reviews::form::ReviewForm;
use crate::helpers::{confirm, show_toast, ToastKind};

pub enum Msg {
    Refresh,
    Loaded {
        generation: u32,
        movies: Vec<Movie>,
        feed: Vec<FeedEntry>,
    },
    LoadFailed {
        generation: u32,
        error: FetchError,
    },
    DeleteMovie(i64),
    DeleteReview(i64),
    Deleted(Result<String, FetchError>),
}

pub struct App {
    /// `None` until the first successful load.
    movies: Option<Vec<Movie>>,
    feed: Vec<FeedEntry>,
    load_error: Option<String>,
    /// Bumped on every refresh; responses from older refreshes are dropped.
    generation: u32,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            movies: None,
            feed: Vec::new(),
            load_error: None,
            generation: 0,
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            ctx.link().send_message(Msg::Refresh);
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Refresh => {
                self.generation = self.generation.wrapping_add(1);
                let generation = self.generation;
                let link = ctx.link().clone();
                spawn_local(async move {
                    match api::fetch_movies().await {
                        Ok(movies) => {
                            let feed = load_feed(&movies).await;
                            link.send_message(Msg::Loaded {
                                generation,
                                movies,
                                feed,
                            });
                        }
                        Err(error) => link.send_message(Msg::LoadFailed { generation, error }),
                    }
                });
                false
            }
            Msg::Loaded {
                generation,
                movies,
                feed,
            } => {
                if generation != self.generation {
                    return false;
                }
                self.movies = Some(movies);
                self.feed = feed;
                self.load_error = None;
                true
            }
            Msg::LoadFailed { generation, error } => {
                if generation != self.generation {
                    return false;
                }
                error!(format!("Failed to load movies: {}", error));
                self.load_error = Some(format!("Could not load the movie list. {}", error));
                true
            }
            Msg::DeleteMovie(movie_id) => {
                let title = self
                    .movies
                    .as_ref()
                    .and_then(|movies| movies.iter().find(|m| m.id == movie_id))
                    .map(|m| m.title.clone())
                    .unwrap_or_default();
                if !confirm(&format!("Delete \"{}\" and all of its reviews?", title)) {
                    return false;
                }
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = api::delete_movie(movie_id).await.map(|m| m.message);
                    link.send_message(Msg::Deleted(result));
                });
                false
            }
            Msg::DeleteReview(review_id) => {
                if !confirm("Delete this review?") {
                    return false;
                }
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = api::delete_review(review_id).await.map(|m| m.message);
                    link.send_message(Msg::Deleted(result));
                });
                false
            }
            Msg::Deleted(Ok(message)) => {
                show_toast(&format!("{}.", message), ToastKind::Success);
                ctx.link().send_message(Msg::Refresh);
                false
            }
            Msg::Deleted(Err(err)) => {
                error!(format!("Delete failed: {}", err));
                show_toast(&format!("Delete failed. {}", err), ToastKind::Error);
                ctx.link().send_message(Msg::Refresh);
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let movies = self.movies.clone().unwrap_or_default();
        let state = list_state(self.movies.as_deref(), self.load_error.is_some());
        let has_movies = state == ListState::Ready;

        html! {
            <div class="archive-root">
                <h1>{"🎬 Movie Archive"}</h1>

                <section>
                    <h2>{"Add a movie"}</h2>
                    <MovieFormComponent on_saved={link.callback(|_| Msg::Refresh)} />
                </section>

                <section>
                    <h2>{"Movies"}</h2>
                    {
                        if let Some(error) = &self.load_error {
                            html! { <div class="banner error">{ error.clone() }</div> }
                        } else if self.movies.is_none() {
                            html! { <p class="muted">{"Loading..."}</p> }
                        } else {
                            html! {
                                <MovieGallery
                                    movies={movies.clone()}
                                    on_delete={link.callback(Msg::DeleteMovie)}
                                />
                            }
                        }
                    }
                </section>

                <section>
                    <h2>{"Add a review"}</h2>
                    {
                        match state {
                            ListState::Ready => html! {
                                <ReviewForm
                                    movies={movies.clone()}
                                    on_saved={link.callback(|_| Msg::Refresh)}
                                />
                            },
                            ListState::Empty => html! {
                                <p class="muted">{"Add a movie before writing a review."}</p>
                            },
                            ListState::Loading | ListState::Failed => html! {},
                        }
                    }
                </section>

                <section>
                    <h2>{"Recent reviews"}</h2>
                    {
                        match state {
                            ListState::Ready | ListState::Empty => html! {
                                <ReviewFeed
                                    entries={self.feed.clone()}
                                    {has_movies}
                                    on_delete={link.callback(Msg::DeleteReview)}
                                />
                            },
                            ListState::Loading => html! { <p class="muted">{"Loading..."}</p> },
                            ListState::Failed => html! {
                                <p class="muted">{"Reviews are unavailable until the movie list loads."}</p>
                            },
                        }
                    }
                </section>
            </div>
        }
    }
}

/// What the movie list looks like to the sections that depend on it.
#[derive(Clone, Copy, Debug, PartialEq)]
enum ListState {
    Loading,
    /// The last refresh failed; the error banner in the gallery explains why.
    Failed,
    Empty,
    Ready,
}

/// A failed refresh wins over an older successful one, so the review
/// sections never claim "no movies" while the list is in fact unknown.
fn list_state(movies: Option<&[Movie]>, load_failed: bool) -> ListState {
    if load_failed {
        return ListState::Failed;
    }
    match movies {
        None => ListState::Loading,
        Some([]) => ListState::Empty,
        Some(_) => ListState::Ready,
    }
}

/// Fetches every movie's reviews and merges them into the recent feed.
///
/// A movie whose reviews fail to load is left out of the feed rather than
/// failing the whole refresh.
async fn load_feed(movies: &[Movie]) -> Vec<FeedEntry> {
    let mut batches = Vec::with_capacity(movies.len());
    for movie in movies {
        match api::fetch_reviews(movie.id).await {
            Ok(reviews) => batches.push((movie.title.clone(), reviews)),
            Err(err) => warn!(format!(
                "Skipping reviews of movie {}: {}",
                movie.id, err
            )),
        }
    }
    recent_reviews(batches, RECENT_REVIEW_LIMIT)
}
