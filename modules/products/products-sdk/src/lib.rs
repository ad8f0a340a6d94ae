//! Products SDK: wire contract, models, and the typed client.

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

mod api;
mod client;
mod model;
pub mod proto;

pub use api::ProductService;
pub use client::ProductsClient;
pub use model::{NewProduct, Product};

/// Service name constant for the Products service.
pub const SERVICE_NAME: &str = "storefront.products.v1.ProductService";
