//! Dashboard configuration collaborator.
//!
//! Owns every method under the `/api/config` prefix: an in-memory store
//! of dashboard configuration entries and the route tree that serves it.

pub mod routes;
pub mod store;

pub use routes::{router, router_with_store};
pub use store::ConfigStore;
