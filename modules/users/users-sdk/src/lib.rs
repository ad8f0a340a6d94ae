//! Users SDK
//!
//! Everything needed to consume the Users service:
//! - wire contract (`proto`, [`UserService`])
//! - domain models ([`User`], [`NewUser`])
//! - typed client ([`UsersClient`]) returning `ServiceResult<T>`

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

mod api;
mod client;
mod model;
pub mod proto;

pub use api::UserService;
pub use client::UsersClient;
pub use model::{NewUser, User};

/// Service name constant for the Users service (used for diagnostics).
pub const SERVICE_NAME: &str = "storefront.users.v1.UserService";
