use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use super::messages::{MovieField, Msg};
use super::state::MovieFormComponent;

pub fn view(component: &MovieFormComponent, ctx: &Context<MovieFormComponent>) -> Html {
    let link = ctx.link();

    html! {
        <div class="movie-form">
            { text_input(component, link, MovieField::Title, "Title", "") }
            { text_input(component, link, MovieField::ReleaseDate, "Release date", "YYYY-MM-DD") }
            { text_input(component, link, MovieField::Director, "Director", "") }
            { text_input(component, link, MovieField::Genre, "Genre", "") }
            { text_input(component, link, MovieField::PosterUrl, "Poster URL", "https://") }
            <button
                type="button"
                class="primary-btn"
                disabled={component.submitting}
                onclick={link.callback(|_| Msg::Submit)}
            >
                { if component.submitting { "Saving..." } else { "Add movie" } }
            </button>
            {
                if let Some(error) = &component.error {
                    html! { <div class="banner error">{ error.clone() }</div> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

/// A labelled single-line input bound to one draft field.
fn text_input(
    component: &MovieFormComponent,
    link: &Scope<MovieFormComponent>,
    field: MovieField,
    label: &'static str,
    placeholder: &'static str,
) -> Html {
    let oninput = link.callback(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::UpdateField(field, input.value())
    });

    html! {
        <label class="field">
            <span>{ label }</span>
            <input
                type="text"
                placeholder={placeholder}
                value={component.draft.get(field).to_string()}
                {oninput}
            />
        </label>
    }
}
