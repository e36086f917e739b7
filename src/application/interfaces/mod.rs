/// Auth endpoints
pub mod auth;
/// Book endpoints
pub mod book;
