//! Explicit constructor wiring of the whole platform.
//!
//! Repositories -> domain services -> RPC impls -> SDK clients -> gateway.
//! Every dependency is passed at construction; there is no ambient
//! registry to resolve from.

use std::sync::Arc;
use std::time::Duration;

use transport_grpc::client::ClientConfig;

use addresses_sdk::AddressesClient;
use orders_sdk::OrdersClient;
use products_sdk::ProductsClient;
use users_sdk::UsersClient;

use crate::config::AppConfig;

pub struct Platform {
    pub gateway: gateway::Service,
    pub users: UsersClient,
    pub addresses: AddressesClient,
    pub orders: OrdersClient,
    pub products: ProductsClient,
}

impl Platform {
    pub fn wire(config: &AppConfig) -> Self {
        let deadline = Duration::from_millis(config.services.call_deadline_ms);

        let users_service = Arc::new(users::domain::Service::new(
            Arc::new(users::infra::storage::InMemoryUsersRepository::new()),
            users::domain::ServiceConfig {
                max_display_name_length: config.services.users.max_display_name_length,
            },
        ));
        let users_client = UsersClient::with_config(
            Arc::new(users::api::grpc::UserServiceImpl::new(users_service)),
            ClientConfig::new("users").with_call_deadline(deadline),
        );

        let addresses_service = Arc::new(addresses::domain::Service::new(Arc::new(
            addresses::infra::storage::InMemoryAddressesRepository::new(),
        )));
        let addresses_client = AddressesClient::with_config(
            Arc::new(addresses::api::grpc::AddressServiceImpl::new(
                addresses_service,
            )),
            ClientConfig::new("addresses").with_call_deadline(deadline),
        );

        let orders_service = Arc::new(orders::domain::Service::new(Arc::new(
            orders::infra::storage::InMemoryOrdersRepository::new(),
        )));
        let orders_client = OrdersClient::with_config(
            Arc::new(orders::api::grpc::OrderServiceImpl::new(orders_service)),
            ClientConfig::new("orders").with_call_deadline(deadline),
        );

        let products_service = Arc::new(products::domain::Service::new(Arc::new(
            products::infra::storage::InMemoryProductsRepository::new(),
        )));
        let products_client = ProductsClient::with_config(
            Arc::new(products::api::grpc::ProductServiceImpl::new(
                products_service,
            )),
            ClientConfig::new("products").with_call_deadline(deadline),
        );

        let gateway = gateway::Service::new(
            users_client.clone(),
            addresses_client.clone(),
            orders_client.clone(),
            products_client.clone(),
        );

        Self {
            gateway,
            users: users_client,
            addresses: addresses_client,
            orders: orders_client,
            products: products_client,
        }
    }
}
