pub mod form;
pub mod gallery;
