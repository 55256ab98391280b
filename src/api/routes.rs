//! HTTP API route definitions.

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::handlers::{health, root};

/// Create the API router.
///
/// `config_routes` is the dashboard configuration collaborator; it owns
/// every method under the `/api/config` prefix. The CORS layer is
/// permissive: any origin, any method, any headers.
pub fn create_router(config_routes: Router) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .nest("/api/config", config_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
