//! Addresses service.
//!
//! Postal addresses are owned per user; ownership cleanup across services
//! is the gateway's job, this service only guards its own invariants.

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod api;
pub mod domain;
pub mod infra;
