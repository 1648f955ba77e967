use common::model::movie::Movie;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct MovieFormProps {
    /// Called with the stored movie after the backend accepted it.
    pub on_saved: Callback<Movie>,
}
