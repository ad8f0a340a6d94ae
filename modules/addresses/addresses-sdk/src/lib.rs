//! Addresses SDK: wire contract, models, and the typed client.

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

mod api;
mod client;
mod model;
pub mod proto;

pub use api::AddressService;
pub use client::AddressesClient;
pub use model::{Address, NewAddress};

/// Service name constant for the Addresses service.
pub const SERVICE_NAME: &str = "storefront.addresses.v1.AddressService";
