//! Add-review form.
//!
//! The movie selector is keyed by movie id: option values are ids and labels
//! come from `movie_options`, which disambiguates repeated titles. Selecting
//! by title would collapse movies that share one.

use common::model::movie::{movie_options, Movie};
use common::model::review::Review;
use common::requests::NewReview;
use gloo_console::error;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::{self, FetchError};
use crate::helpers::{show_toast, ToastKind};

#[derive(Properties, PartialEq)]
pub struct ReviewFormProps {
    pub movies: Vec<Movie>,
    pub on_saved: Callback<Review>,
}

pub enum Msg {
    SelectMovie(String),
    UpdateAuthor(String),
    UpdateContent(String),
    Submit,
    Submitted(Result<Review, FetchError>),
}

pub struct ReviewForm {
    selected: Option<i64>,
    author: String,
    content: String,
    error: Option<String>,
    submitting: bool,
}

impl ReviewForm {
    /// Keeps the current selection if that movie still exists, otherwise
    /// falls back to the first movie.
    fn reconcile_selection(&mut self, movies: &[Movie]) {
        let still_present = self
            .selected
            .is_some_and(|id| movies.iter().any(|m| m.id == id));
        if !still_present {
            self.selected = movies.first().map(|m| m.id);
        }
    }
}

impl Component for ReviewForm {
    type Message = Msg;
    type Properties = ReviewFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut form = Self {
            selected: None,
            author: String::new(),
            content: String::new(),
            error: None,
            submitting: false,
        };
        form.reconcile_selection(&ctx.props().movies);
        form
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        self.reconcile_selection(&ctx.props().movies);
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SelectMovie(value) => {
                self.selected = value.parse().ok();
                true
            }
            Msg::UpdateAuthor(author) => {
                self.author = author;
                true
            }
            Msg::UpdateContent(content) => {
                self.content = content;
                true
            }
            Msg::Submit => {
                if self.submitting {
                    return false;
                }
                let Some(movie_id) = self.selected else {
                    self.error = Some("Pick a movie first.".to_string());
                    return true;
                };
                self.submitting = true;
                self.error = None;

                let payload = NewReview {
                    movie_id,
                    author: self.author.clone(),
                    content: self.content.clone(),
                };
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = api::create_review(&payload).await;
                    link.send_message(Msg::Submitted(result));
                });
                true
            }
            Msg::Submitted(Ok(review)) => {
                self.submitting = false;
                self.author.clear();
                self.content.clear();
                show_toast("Review added.", ToastKind::Success);
                ctx.props().on_saved.emit(review);
                true
            }
            Msg::Submitted(Err(err)) => {
                self.submitting = false;
                error!(format!("Failed to create review: {}", err));
                self.error = Some(format!("Could not add the review. {}", err));
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let options = movie_options(&ctx.props().movies);

        let onchange = link.callback(|e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            Msg::SelectMovie(select.value())
        });
        let on_author = link.callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::UpdateAuthor(input.value())
        });
        let on_content = link.callback(|e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            Msg::UpdateContent(input.value())
        });

        html! {
            <div class="review-form">
                <label class="field">
                    <span>{"Movie"}</span>
                    <select {onchange}>
                        { for options.into_iter().map(|option| html! {
                            <option
                                key={option.id.to_string()}
                                value={option.id.to_string()}
                                selected={self.selected == Some(option.id)}
                            >
                                { option.label }
                            </option>
                        }) }
                    </select>
                </label>
                <label class="field">
                    <span>{"Author"}</span>
                    <input type="text" value={self.author.clone()} oninput={on_author} />
                </label>
                <label class="field">
                    <span>{"Review"}</span>
                    <textarea rows="4" value={self.content.clone()} oninput={on_content} />
                </label>
                <button
                    type="button"
                    class="primary-btn"
                    disabled={self.submitting}
                    onclick={link.callback(|_| Msg::Submit)}
                >
                    { if self.submitting { "Saving..." } else { "Add review" } }
                </button>
                {
                    if let Some(error) = &self.error {
                        html! { <div class="banner error">{ error.clone() }</div> }
                    } else {
                        html! {}
                    }
                }
            </div>
        }
    }
}
