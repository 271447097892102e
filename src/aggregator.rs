//! Order value aggregation across the product and order services.

use rust_decimal::Decimal;

use crate::downstream::DownstreamClient;
use crate::error::GatewayError;
use crate::models::{Order, Product};

/// Computes what a sequence of products is worth right now by fanning
/// out to the product service, one id at a time.
#[derive(Clone)]
pub struct ValueAggregator {
    client: DownstreamClient,
    products_url: String,
}

impl ValueAggregator {
    pub fn new(client: DownstreamClient, products_url: String) -> Self {
        Self {
            client,
            products_url,
        }
    }

    /// Sum the current price of every id, accumulated in input order.
    ///
    /// Fail-fast: the first non-success lookup aborts the aggregation
    /// and is surfaced as-is; ids after it are not fetched. Duplicates
    /// are priced once per occurrence. An empty sequence is worth zero.
    pub async fn order_value(&self, product_ids: &[String]) -> Result<Decimal, GatewayError> {
        let mut total = Decimal::ZERO;
        for pid in product_ids {
            let url = format!("{}/{}", self.products_url, pid);
            let product: Product = self.client.get_json("products", &url).await?;
            total += product.price_usd.to_decimal();
        }
        Ok(total.normalize())
    }
}

/// Single source of truth for an order's current worth.
///
/// Fetches the order's product list and reprices it from live product
/// data on every call, never from a stored amount.
#[derive(Clone)]
pub struct CartAggregator {
    client: DownstreamClient,
    orders_url: String,
    pricing: ValueAggregator,
}

impl CartAggregator {
    pub fn new(client: DownstreamClient, orders_url: String, pricing: ValueAggregator) -> Self {
        Self {
            client,
            orders_url,
            pricing,
        }
    }

    /// Current authoritative value of the order with the given id.
    ///
    /// Order-service errors (non-success status, transport failure) use
    /// the same taxonomy as the product lookups.
    pub async fn order_amount(&self, order_id: &str) -> Result<Decimal, GatewayError> {
        let url = format!("{}/orders/{}", self.orders_url, order_id);
        let order: Order = self.client.get_json("orders", &url).await?;
        self.pricing.order_value(&order.product_ids).await
    }
}
