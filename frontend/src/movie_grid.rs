use yew::{html, Children, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct MovieGridProps {
    pub columns: usize,
    pub children: Children,
}

/// Fixed-column CSS grid used by the movie gallery.
pub struct MovieGrid;

impl Component for MovieGrid {
    type Message = ();
    type Properties = MovieGridProps;

    fn create(_ctx: &Context<Self>) -> Self {
        MovieGrid
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let style = format!(
            "display: grid;
             grid-template-columns: repeat({}, 1fr);
             gap: 16px;
             align-items: start;",
            props.columns
        );

        html! {
            <div class="movie-grid" style={style}>
                { for props.children.iter() }
            </div>
        }
    }
}
