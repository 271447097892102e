use std::time::Duration;

use crate::aggregator::{CartAggregator, ValueAggregator};
use crate::config::ServicesConfig;
use crate::downstream::DownstreamClient;
use crate::gateway::auth::TokenVerifier;

/// Shared gateway state.
///
/// Stateless across requests: everything here is immutable after
/// startup, so handlers need no locks.
pub struct AppState {
    pub verifier: TokenVerifier,
    pub client: DownstreamClient,
    pub services: ServicesConfig,
    pub pricing: ValueAggregator,
    pub carts: CartAggregator,
}

impl AppState {
    pub fn new(jwt_secret: &str, services: ServicesConfig) -> Result<Self, reqwest::Error> {
        let client = DownstreamClient::new(Duration::from_secs(services.timeout_secs))?;
        let pricing = ValueAggregator::new(client.clone(), services.products_url.clone());
        let carts = CartAggregator::new(
            client.clone(),
            services.orders_url.clone(),
            pricing.clone(),
        );
        Ok(Self {
            verifier: TokenVerifier::new(jwt_secret),
            client,
            services,
            pricing,
            carts,
        })
    }
}
