use common::requests::{optional_text, NewMovie};

use super::messages::MovieField;

/// Raw contents of the five inputs, exactly as typed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MovieDraft {
    pub title: String,
    pub release_date: String,
    pub director: String,
    pub genre: String,
    pub poster_url: String,
}

impl MovieDraft {
    pub fn get(&self, field: MovieField) -> &str {
        match field {
            MovieField::Title => &self.title,
            MovieField::ReleaseDate => &self.release_date,
            MovieField::Director => &self.director,
            MovieField::Genre => &self.genre,
            MovieField::PosterUrl => &self.poster_url,
        }
    }

    pub fn set(&mut self, field: MovieField, value: String) {
        let slot = match field {
            MovieField::Title => &mut self.title,
            MovieField::ReleaseDate => &mut self.release_date,
            MovieField::Director => &mut self.director,
            MovieField::Genre => &mut self.genre,
            MovieField::PosterUrl => &mut self.poster_url,
        };
        *slot = value;
    }

    /// Builds the request body. Blank optional inputs are sent as `null`; the
    /// title is sent as typed, even when empty.
    pub fn to_payload(&self) -> NewMovie {
        NewMovie {
            title: self.title.clone(),
            release_date: optional_text(&self.release_date),
            director: optional_text(&self.director),
            genre: optional_text(&self.genre),
            poster_url: optional_text(&self.poster_url),
        }
    }
}

pub struct MovieFormComponent {
    pub draft: MovieDraft,
    /// Inline error from the last failed submit.
    pub error: Option<String>,
    /// Disables the submit button while a request is in flight.
    pub submitting: bool,
}

impl MovieFormComponent {
    pub fn new() -> Self {
        Self {
            draft: MovieDraft::default(),
            error: None,
            submitting: false,
        }
    }
}
