//! Transparent forwarding of `/api/v1/products/**` to the product
//! service.

use std::sync::Arc;

use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::{HeaderMap, HeaderValue, Method, header},
    response::{IntoResponse, Response},
};

use super::super::state::AppState;
use crate::error::GatewayError;

/// Any method on the bare `/api/v1/products` prefix.
pub async fn proxy_products_root(
    State(state): State<Arc<AppState>>,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, GatewayError> {
    forward(state, method, None, headers, body).await
}

/// Any method on an arbitrary sub-path under the products prefix.
pub async fn proxy_products(
    State(state): State<Arc<AppState>>,
    Path(path): Path<String>,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, GatewayError> {
    forward(state, method, Some(path), headers, body).await
}

async fn forward(
    state: Arc<AppState>,
    method: Method,
    path: Option<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, GatewayError> {
    let base = &state.services.products_url;
    let url = match path {
        Some(p) if !p.is_empty() => format!("{}/{}", base, p),
        _ => base.clone(),
    };

    // Host is hop-by-hop; everything else goes through untouched.
    let mut forwarded = HeaderMap::new();
    for (name, value) in headers.iter() {
        if name != header::HOST {
            forwarded.append(name.clone(), value.clone());
        }
    }

    tracing::debug!("proxying {} {}", method, url);
    let upstream = state
        .client
        .forward("products", method, &url, forwarded, body)
        .await?;

    // The upstream status must survive the hop unchanged.
    let status = upstream.status();
    let content_type = upstream
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);

    let is_json = content_type
        .as_deref()
        .is_some_and(|ct| ct.starts_with("application/json"));

    if is_json {
        let value: serde_json::Value =
            upstream
                .json()
                .await
                .map_err(|source| GatewayError::Transport {
                    service: "products",
                    source,
                })?;
        Ok((status, Json(value)).into_response())
    } else {
        let text = upstream
            .text()
            .await
            .map_err(|source| GatewayError::Transport {
                service: "products",
                source,
            })?;
        let mut response = (status, text).into_response();
        if let Some(ct) = content_type
            && let Ok(value) = HeaderValue::from_str(&ct)
        {
            response.headers_mut().insert(header::CONTENT_TYPE, value);
        }
        Ok(response)
    }
}
