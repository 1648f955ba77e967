pub mod message;
pub mod movie;
pub mod review;
