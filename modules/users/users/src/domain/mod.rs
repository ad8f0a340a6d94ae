pub mod repo;
pub mod service;

pub use service::{Service, ServiceConfig};
