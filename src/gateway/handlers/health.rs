//! Liveness probe.

use axum::{Json, http::StatusCode};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub message: String,
}

/// `GET /healthz`
///
/// Responds 201 with a fixed greeting; deployment probes key off that
/// exact pair.
pub async fn health() -> (StatusCode, Json<HealthResponse>) {
    (
        StatusCode::CREATED,
        Json(HealthResponse {
            message: "Hello from Api Gateway service!".to_string(),
        }),
    )
}
