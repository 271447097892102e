pub mod health;
pub mod order;
pub mod payment;
pub mod proxy;

use axum::http::{HeaderMap, header};

/// Pull the raw `Authorization` header value, if any. Verification is
/// the [`TokenVerifier`](crate::gateway::auth::TokenVerifier)'s job.
pub(crate) fn auth_header(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
}
