//! HTTP API module: core handlers and router assembly.

pub mod handlers;
pub mod routes;

pub use routes::create_router;
