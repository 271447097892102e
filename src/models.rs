//! Data model shared with the downstream services.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Order lifecycle as reported by the order service. The gateway never
/// mutates this directly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Paid,
}

/// Order as exchanged with the order service.
///
/// `id` is assigned upstream and stays empty until the order service has
/// created the record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    #[serde(default)]
    pub id: String,
    pub user_id: String,
    pub product_ids: Vec<String>,
    #[serde(default)]
    pub status: OrderStatus,
}

/// Payment as exchanged with the payment service. Read-only from the
/// gateway once created; `status` is free-form and owned upstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    #[serde(default)]
    pub id: String,
    pub user_id: String,
    pub order_id: String,
    pub amount: Decimal,
    #[serde(default)]
    pub status: String,
}

/// Response view pairing a created order with its value computed from
/// current product prices. Never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartDetails {
    pub order: Order,
    pub amount: Decimal,
}

/// Body of `POST /api/v1/order/create`.
///
/// `product_ids` is optional at the wire level so a null sequence
/// surfaces as Malformed Request instead of a deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct OrderRequest {
    #[serde(default)]
    pub product_ids: Option<Vec<String>>,
}

/// Body of `POST /api/v1/payments/pay`.
#[derive(Debug, Deserialize)]
pub struct PaymentRequest {
    pub order_id: String,
    pub amount: Decimal,
}

/// Structured currency value returned by the product service:
/// whole currency units plus a nano-unit fractional component.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PriceUsd {
    pub units: i64,
    #[serde(default)]
    pub nanos: i32,
}

impl PriceUsd {
    /// Combination rule: `units + nanos * 10^-9`, with trailing zeros
    /// trimmed. Both components share the sign of the value.
    pub fn to_decimal(self) -> Decimal {
        (Decimal::from(self.units) + Decimal::new(self.nanos as i64, 9)).normalize()
    }
}

/// Product record as returned by `GET <products_url>/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct Product {
    #[serde(rename = "priceUsd")]
    pub price_usd: PriceUsd,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_price_whole_units_only() {
        let p = PriceUsd { units: 10, nanos: 0 };
        assert_eq!(p.to_decimal(), Decimal::from(10));
    }

    #[test]
    fn test_price_with_fractional_component() {
        let p = PriceUsd {
            units: 5,
            nanos: 500_000_000,
        };
        assert_eq!(p.to_decimal(), Decimal::from_str("5.50").unwrap());
    }

    #[test]
    fn test_price_single_nano() {
        let p = PriceUsd { units: 0, nanos: 1 };
        assert_eq!(p.to_decimal(), Decimal::from_str("0.000000001").unwrap());
    }

    #[test]
    fn test_price_sum_matches_catalog_scenario() {
        // 10.00 + 5.50 = 15.50
        let p1 = PriceUsd { units: 10, nanos: 0 };
        let p2 = PriceUsd {
            units: 5,
            nanos: 500_000_000,
        };
        assert_eq!(
            p1.to_decimal() + p2.to_decimal(),
            Decimal::from_str("15.50").unwrap()
        );
    }

    #[test]
    fn test_product_deserializes_price_usd_key() {
        let json = r#"{"priceUsd": {"units": 3, "nanos": 250000000}}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(
            product.price_usd.to_decimal(),
            Decimal::from_str("3.25").unwrap()
        );
    }

    #[test]
    fn test_order_status_defaults_to_pending() {
        let json = r#"{"user_id": "u1", "product_ids": ["p1"]}"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.status, OrderStatus::Pending);
        assert!(order.id.is_empty());
    }

    #[test]
    fn test_order_status_serializes_lowercase() {
        let order = Order {
            id: "ord-1".to_string(),
            user_id: "u1".to_string(),
            product_ids: vec!["p1".to_string()],
            status: OrderStatus::Pending,
        };
        let value = serde_json::to_value(&order).unwrap();
        assert_eq!(value["status"], "pending");
    }

    #[test]
    fn test_order_request_null_ids_is_none() {
        let req: OrderRequest = serde_json::from_str(r#"{"product_ids": null}"#).unwrap();
        assert!(req.product_ids.is_none());
        let req: OrderRequest = serde_json::from_str(r#"{}"#).unwrap();
        assert!(req.product_ids.is_none());
    }

    #[test]
    fn test_payment_request_accepts_numeric_amount() {
        let req: PaymentRequest =
            serde_json::from_str(r#"{"order_id": "ord-1", "amount": 15.5}"#).unwrap();
        assert_eq!(req.amount, Decimal::from_str("15.50").unwrap());
    }
}
