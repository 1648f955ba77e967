use crate::app::App;

mod api;
mod app;
mod components;
mod helpers;
mod movie_grid;

fn main() {
    yew::Renderer::<App>::new().render();
}
