//! Add-movie form: root module wiring the Yew `Component` implementation with
//! submodules for messages, props, state, update logic and view rendering.
//!
//! On a successful submit the inputs are cleared and the parent is notified
//! through `on_saved` so it can re-fetch the gallery; a failure stays inline
//! under the form until the next attempt.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::MovieFormProps;
pub use state::MovieFormComponent;

impl Component for MovieFormComponent {
    type Message = Msg;
    type Properties = MovieFormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        MovieFormComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
