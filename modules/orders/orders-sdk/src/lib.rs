//! Orders SDK: wire contract, models, and the typed client.
//!
//! Order cleanup during cross-service workflows goes through
//! `cancel_order`: orders are detached by cancellation, never deleted.

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

mod api;
mod client;
mod model;
pub mod proto;

pub use api::OrderService;
pub use client::OrdersClient;
pub use model::{NewOrder, Order, OrderStatus};

/// Service name constant for the Orders service.
pub const SERVICE_NAME: &str = "storefront.orders.v1.OrderService";
