/// Module containing the auth endpoints of the API client
pub mod auth_service;
/// Module containing the book endpoints of the API client
pub mod book_service;

pub use crate::application::interfaces::auth::*;
pub use crate::application::interfaces::book::*;
pub use book_service::{book_endpoint, book_status_endpoint, books_endpoint};
