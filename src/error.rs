//! Unified error types for the compliance backend.

use std::net::SocketAddr;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Unified error type for server startup and operation.
#[derive(Error, Debug)]
pub enum ServerError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Listener could not be bound (port in use, bad address). Fatal.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        /// The address that could not be bound.
        addr: SocketAddr,
        /// Underlying bind failure.
        source: std::io::Error,
    },

    /// IO error while serving connections.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Request-level errors surfaced to HTTP clients.
///
/// Responses carry a small JSON body and never leak internal detail.
#[derive(Error, Debug)]
pub enum ApiError {
    /// No configuration entry stored under the requested key.
    #[error("unknown configuration key: {0}")]
    UnknownKey(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::UnknownKey(_) => StatusCode::NOT_FOUND,
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, ServerError>;
