//! Outbound HTTP plumbing shared by every downstream call.

use std::time::Duration;

use axum::body::Bytes;
use axum::http::{HeaderMap, Method};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::GatewayError;

/// Connection-pooled client for the downstream services.
///
/// Built once at startup and cloned into every component that calls out.
/// The timeout applies per call, not per gateway request. Every call is
/// attempted exactly once; retry policy, if ever wanted, belongs in a
/// caller-side wrapper.
#[derive(Clone)]
pub struct DownstreamClient {
    http: reqwest::Client,
}

impl DownstreamClient {
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http })
    }

    /// GET a JSON resource. See [`classify`] for the outcome buckets.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        service: &'static str,
        url: &str,
    ) -> Result<T, GatewayError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|source| GatewayError::Transport { service, source })?;
        classify(service, response).await
    }

    /// POST a JSON body and parse the JSON response.
    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        service: &'static str,
        url: &str,
        body: &B,
    ) -> Result<T, GatewayError> {
        let response = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|source| GatewayError::Transport { service, source })?;
        classify(service, response).await
    }

    /// Raw forwarding for the products proxy: the caller keeps full
    /// control of method, headers and body, and gets the upstream
    /// response back unclassified.
    pub async fn forward(
        &self,
        service: &'static str,
        method: Method,
        url: &str,
        headers: HeaderMap,
        body: Bytes,
    ) -> Result<reqwest::Response, GatewayError> {
        self.http
            .request(method, url)
            .headers(headers)
            .body(body)
            .send()
            .await
            .map_err(|source| GatewayError::Transport { service, source })
    }
}

/// Sort a received response into the non-transport buckets: non-success
/// status becomes `Upstream` carrying the status and body verbatim;
/// success is parsed into `T`.
async fn classify<T: DeserializeOwned>(
    service: &'static str,
    response: reqwest::Response,
) -> Result<T, GatewayError> {
    let status = response.status();
    if !status.is_success() {
        let body = upstream_body(response).await;
        return Err(GatewayError::Upstream { status, body });
    }
    response.json::<T>().await.map_err(|e| {
        tracing::error!("unparseable success body from {}: {}", service, e);
        GatewayError::Internal("Internal Server Error")
    })
}

/// Error bodies pass through verbatim when they are JSON; anything else
/// is wrapped as a JSON string so the caller still sees it.
async fn upstream_body(response: reqwest::Response) -> serde_json::Value {
    let text = response.text().await.unwrap_or_default();
    serde_json::from_str(&text).unwrap_or(serde_json::Value::String(text))
}
