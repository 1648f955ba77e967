use gloo_console::error;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::helpers::{show_toast, ToastKind};

use super::messages::Msg;
use super::state::{MovieDraft, MovieFormComponent};

/// Central update function for the add-movie form.
///
/// Returns `true` when the view has to re-render.
pub fn update(
    component: &mut MovieFormComponent,
    ctx: &Context<MovieFormComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::UpdateField(field, value) => {
            component.draft.set(field, value);
            true
        }
        Msg::Submit => {
            if component.submitting {
                return false;
            }
            component.submitting = true;
            component.error = None;

            let payload = component.draft.to_payload();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = api::create_movie(&payload).await;
                link.send_message(Msg::Submitted(result));
            });
            true
        }
        Msg::Submitted(Ok(movie)) => {
            component.submitting = false;
            component.draft = MovieDraft::default();
            show_toast(&format!("Added \"{}\".", movie.title), ToastKind::Success);
            ctx.props().on_saved.emit(movie);
            true
        }
        Msg::Submitted(Err(err)) => {
            component.submitting = false;
            error!(format!("Failed to create movie: {}", err));
            component.error = Some(format!("Could not add the movie. {}", err));
            true
        }
    }
}
