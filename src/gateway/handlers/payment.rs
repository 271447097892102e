//! Payment reconciliation and status lookup.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::HeaderMap,
};

use super::auth_header;
use super::super::state::AppState;
use crate::error::GatewayError;
use crate::models::{Payment, PaymentRequest};

/// `POST /api/v1/payments/pay`
///
/// The claimed amount is reconciled against the order's authoritative
/// value before the payment service is contacted; on mismatch the
/// payment service is never called. The payment is created with the
/// authoritative amount, not the claimed one.
pub async fn make_payment(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<Payment>, GatewayError> {
    let user_id = state.verifier.verify(auth_header(&headers))?;

    let request: PaymentRequest =
        serde_json::from_value(body).map_err(|_| GatewayError::BadRequest("Malformed Request"))?;

    let order_value = state.carts.order_amount(&request.order_id).await?;
    // Exact decimal comparison; both sides are exact decimals end to end,
    // so no epsilon is involved.
    if order_value != request.amount {
        tracing::warn!(
            "amount mismatch for order {}: claimed {}, authoritative {}",
            request.order_id,
            request.amount,
            order_value
        );
        return Err(GatewayError::BadRequest("Invalid Amount"));
    }

    let pending = Payment {
        id: String::new(),
        user_id,
        order_id: request.order_id,
        amount: order_value,
        status: String::new(),
    };

    let url = format!("{}/payments", state.services.payments_url);
    // Payment creation collapses every upstream failure to one opaque
    // status; transport failures keep their generic rendering.
    match state
        .client
        .post_json::<_, Payment>("payments", &url, &pending)
        .await
    {
        Ok(payment) => Ok(Json(payment)),
        Err(GatewayError::Upstream { status, .. }) => {
            tracing::error!("payment service rejected payment creation with {}", status);
            Err(GatewayError::Internal("Payment Failed"))
        }
        Err(other) => Err(other),
    }
}

/// `GET /api/v1/payments/status/{payment_id}`
///
/// Read-only lookup; non-success upstream responses pass through with
/// their original status and body.
pub async fn payment_status(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(payment_id): Path<String>,
) -> Result<Json<Payment>, GatewayError> {
    state.verifier.verify(auth_header(&headers))?;

    let url = format!("{}/payments/{}", state.services.payments_url, payment_id);
    let payment: Payment = state.client.get_json("payments", &url).await?;
    Ok(Json(payment))
}
