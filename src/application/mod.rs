/// Application bootstrap and login / logout flows
pub mod bootstrap;
/// API client
pub mod client;
/// Application configuration module
pub mod config;
/// Service interfaces
pub mod interfaces;
/// Service implementations on top of the API client
pub mod services;
/// Token providers and stores
pub mod token;
