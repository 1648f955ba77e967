pub mod feed;
pub mod form;
