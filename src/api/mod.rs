//! HTTP surface: supervisor panel and requester-facing JSON API

pub mod handlers;
pub mod models;
pub mod panel;
pub mod routes;

pub use handlers::AppState;
pub use routes::build_router;
