//! Gateway error taxonomy and its HTTP rendering.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// Everything that can go wrong while orchestrating a request.
///
/// `Upstream` replays a downstream response verbatim (status and body);
/// every other variant is detected locally and rendered as a
/// `{code, msg}` error body.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("{0}")]
    Unauthorized(&'static str),

    #[error("{0}")]
    BadRequest(&'static str),

    /// A downstream service answered with a non-success status.
    #[error("upstream responded {status}")]
    Upstream {
        status: StatusCode,
        body: serde_json::Value,
    },

    /// Transport-level failure (DNS, connection refused, timeout).
    /// The cause goes to the log, never to the caller.
    #[error("error contacting {service}: {source}")]
    Transport {
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{0}")]
    Internal(&'static str),
}

/// Error body for locally-detected failures.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub msg: String,
}

impl ErrorBody {
    pub fn new(code: &'static str, msg: impl Into<String>) -> Self {
        Self {
            code,
            msg: msg.into(),
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        match self {
            Self::Upstream { status, body } => (status, Json(body)).into_response(),
            Self::Transport { service, source } => {
                tracing::error!("transport failure talking to {}: {}", service, source);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorBody::new(
                        "INTERNAL_ERROR",
                        "Error contacting external API",
                    )),
                )
                    .into_response()
            }
            Self::Unauthorized(msg) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorBody::new("UNAUTHORIZED", msg)),
            )
                .into_response(),
            Self::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody::new("INVALID_PARAMETER", msg)),
            )
                .into_response(),
            Self::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody::new("INTERNAL_ERROR", msg)),
            )
                .into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unauthorized_maps_to_401() {
        let resp = GatewayError::Unauthorized("Invalid token").into_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_bad_request_maps_to_400() {
        let resp = GatewayError::BadRequest("Invalid Amount").into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_internal_maps_to_500() {
        let resp = GatewayError::Internal("Payment Failed").into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_upstream_replays_original_status() {
        let resp = GatewayError::Upstream {
            status: StatusCode::NOT_FOUND,
            body: json!({"detail": "order not found"}),
        }
        .into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
