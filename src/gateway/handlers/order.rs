//! Order creation: create downstream, then price the cart.

use std::sync::Arc;

use axum::{Json, extract::State, http::HeaderMap};

use super::auth_header;
use super::super::state::AppState;
use crate::error::GatewayError;
use crate::models::{CartDetails, Order, OrderRequest, OrderStatus};

/// `POST /api/v1/order/create`
///
/// Auth first, then shape validation, then order creation at the order
/// service, then the value fan-out over the submitted product ids. The
/// returned amount is recomputed at response time from current prices.
pub async fn create_order(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<CartDetails>, GatewayError> {
    let user_id = state.verifier.verify(auth_header(&headers))?;

    let request: OrderRequest =
        serde_json::from_value(body).map_err(|_| GatewayError::BadRequest("Malformed Request"))?;
    let product_ids = request
        .product_ids
        .ok_or(GatewayError::BadRequest("Malformed Request"))?;

    let pending = Order {
        id: String::new(),
        user_id,
        product_ids: product_ids.clone(),
        status: OrderStatus::Pending,
    };

    let url = format!("{}/orders", state.services.orders_url);
    let created: Order = state.client.post_json("orders", &url, &pending).await?;
    if created.id.is_empty() {
        // Success status without a usable order payload breaks the
        // contract with the order service.
        tracing::error!("order service reported success without an order id");
        return Err(GatewayError::Internal("Internal Server Error"));
    }

    // Priced over the submitted ids, not the echoed order.
    let amount = state.pricing.order_value(&product_ids).await?;

    Ok(Json(CartDetails {
        order: created,
        amount,
    }))
}
