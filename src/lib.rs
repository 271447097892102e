//! shopgate — API gateway in front of the orders, payments and products
//! services.
//!
//! The gateway verifies caller tokens, proxies product requests
//! transparently, and orchestrates the multi-service flows: order
//! creation paired with a live cart valuation, and payment creation
//! reconciled against the authoritative order value.

pub mod aggregator;
pub mod config;
pub mod downstream;
pub mod error;
pub mod gateway;
pub mod logging;
pub mod models;
