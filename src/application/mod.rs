/// Session authentication
pub mod auth;
/// Client facade
pub mod client;
/// Application configuration module
pub mod config;
/// Resource kind interfaces
pub mod interfaces;
/// Resource service implementations
pub mod services;
