pub mod auth;
pub mod handlers;
pub mod middleware;
pub mod sessions;
pub mod settings;
pub mod tracing;
pub mod users;
