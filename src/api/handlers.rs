//! Core HTTP handlers: root greeting and liveness probe.

use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use time::OffsetDateTime;

/// Service identification string returned from the root route.
pub const SERVICE_NAME: &str = "NIST-800 Compliance Dashboard Backend";

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Status: "healthy".
    pub status: &'static str,
    /// Time the probe was answered, RFC 3339.
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

/// Root handler - plain-text service identification.
pub async fn root() -> &'static str {
    SERVICE_NAME
}

/// Health check handler - always returns 200 with a fresh timestamp.
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy",
        timestamp: OffsetDateTime::now_utc(),
    })
}
