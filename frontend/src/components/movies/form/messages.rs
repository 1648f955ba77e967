use crate::api::FetchError;
use common::model::movie::Movie;

/// One of the five text inputs of the form.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MovieField {
    Title,
    ReleaseDate,
    Director,
    Genre,
    PosterUrl,
}

pub enum Msg {
    UpdateField(MovieField, String),
    Submit,
    Submitted(Result<Movie, FetchError>),
}
