//! Dashboard configuration routes.
//!
//! Mounted by the server under `/api/config`; paths here are relative
//! to that prefix.

use std::collections::HashMap;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::Value;

use super::store::ConfigStore;
use crate::error::ApiError;

/// Create the configuration route tree backed by a fresh store.
pub fn router() -> Router {
    router_with_store(ConfigStore::new())
}

/// Create the configuration route tree over an existing store.
pub fn router_with_store(store: ConfigStore) -> Router {
    Router::new()
        .route("/", get(list_entries))
        .route(
            "/:key",
            get(get_entry).put(put_entry).delete(delete_entry),
        )
        .with_state(store)
}

/// GET / - full configuration snapshot.
async fn list_entries(State(store): State<ConfigStore>) -> Json<HashMap<String, Value>> {
    Json(store.snapshot().await)
}

/// GET /:key - single entry, 404 when absent.
async fn get_entry(
    State(store): State<ConfigStore>,
    Path(key): Path<String>,
) -> Result<Json<Value>, ApiError> {
    store
        .get(&key)
        .await
        .map(Json)
        .ok_or(ApiError::UnknownKey(key))
}

/// PUT /:key - upsert an entry. 201 on create, 200 on replace; echoes
/// the stored value either way.
async fn put_entry(
    State(store): State<ConfigStore>,
    Path(key): Path<String>,
    Json(value): Json<Value>,
) -> impl IntoResponse {
    let replaced = store.set(key, value.clone()).await;

    let status = if replaced.is_some() {
        StatusCode::OK
    } else {
        StatusCode::CREATED
    };

    (status, Json(value))
}

/// DELETE /:key - remove an entry, 404 when absent.
async fn delete_entry(
    State(store): State<ConfigStore>,
    Path(key): Path<String>,
) -> Result<StatusCode, ApiError> {
    store
        .remove(&key)
        .await
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or(ApiError::UnknownKey(key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Method, Request};
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use tower::ServiceExt;

    fn put_request(key: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(Method::PUT)
            .uri(format!("/{key}"))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(body: Body) -> Value {
        let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn put_creates_then_replaces() {
        let store = ConfigStore::new();

        let response = router_with_store(store.clone())
            .oneshot(put_request("theme", r#""dark""#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = router_with_store(store.clone())
            .oneshot(put_request("theme", r#""light""#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        assert_eq!(store.get("theme").await, Some(json!("light")));
    }

    #[tokio::test]
    async fn get_round_trips_stored_value() {
        let store = ConfigStore::new();
        store
            .set("controls".to_string(), json!({ "ac-1": true }))
            .await;

        let response = router_with_store(store)
            .oneshot(
                Request::builder()
                    .uri("/controls")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response.into_body()).await, json!({ "ac-1": true }));
    }

    #[tokio::test]
    async fn get_unknown_key_is_not_found() {
        let response = router()
            .oneshot(Request::builder().uri("/missing").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response.into_body()).await;
        assert_eq!(body["error"], "unknown configuration key: missing");
    }

    #[tokio::test]
    async fn delete_removes_entry_once() {
        let store = ConfigStore::new();
        store.set("theme".to_string(), json!("dark")).await;

        let response = router_with_store(store.clone())
            .oneshot(
                Request::builder()
                    .method(Method::DELETE)
                    .uri("/theme")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = router_with_store(store)
            .oneshot(
                Request::builder()
                    .method(Method::DELETE)
                    .uri("/theme")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn list_returns_snapshot() {
        let store = ConfigStore::new();
        store.set("theme".to_string(), json!("dark")).await;

        let response = router_with_store(store)
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response.into_body()).await, json!({ "theme": "dark" }));
    }
}
