#![allow(dead_code, clippy::unwrap_used, clippy::expect_used)]

//! Scripted stand-ins for the bounded-context services.
//!
//! The stubs implement the SDK RPC traits and fail through the real error
//! translation layer, so gateway tests exercise the same decode path the
//! production clients use.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use service_kernel::DomainError;
use tonic::{Request, Response, Status};
use transport_grpc::status::domain_status;
use uuid::Uuid;

use addresses_sdk::{Address, AddressService, AddressesClient};
use orders_sdk::{Order, OrderService, OrderStatus, OrdersClient};
use products_sdk::{Product, ProductService, ProductsClient};
use users_sdk::{User, UserService, UsersClient};

// ---------------------------------------------------------------------------
// model builders
// ---------------------------------------------------------------------------

pub fn user() -> User {
    User {
        id: Uuid::new_v4(),
        email: "alice@example.com".to_owned(),
        display_name: "Alice".to_owned(),
        created_at: Utc::now(),
    }
}

pub fn address(user_id: Uuid) -> Address {
    Address {
        id: Uuid::new_v4(),
        user_id,
        street: "1 Main St".to_owned(),
        city: "Springfield".to_owned(),
        postal_code: "12345".to_owned(),
        created_at: Utc::now(),
    }
}

pub fn order(user_id: Uuid) -> Order {
    Order {
        id: Uuid::new_v4(),
        user_id,
        product_id: Uuid::new_v4(),
        quantity: 1,
        status: OrderStatus::Pending,
        placed_at: Utc::now(),
    }
}

pub fn product() -> Product {
    Product {
        id: Uuid::new_v4(),
        name: "Widget".to_owned(),
        price_cents: 1999,
        created_at: Utc::now(),
    }
}

// ---------------------------------------------------------------------------
// stub services
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct StubUsers {
    pub user: Mutex<Option<User>>,
    pub delete_error: Mutex<Option<DomainError>>,
    pub get_calls: AtomicUsize,
    pub delete_calls: AtomicUsize,
}

impl StubUsers {
    pub fn holding(user: User) -> Arc<Self> {
        let stub = Self::default();
        *stub.user.lock().unwrap() = Some(user);
        Arc::new(stub)
    }

    pub fn empty() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn fail_delete_with(&self, error: DomainError) {
        *self.delete_error.lock().unwrap() = Some(error);
    }
}

#[async_trait]
impl UserService for StubUsers {
    async fn create_user(
        &self,
        _request: Request<users_sdk::proto::CreateUserRequest>,
    ) -> Result<Response<users_sdk::proto::UserReply>, Status> {
        Err(Status::unimplemented("not scripted"))
    }

    async fn get_user(
        &self,
        request: Request<users_sdk::proto::GetUserRequest>,
    ) -> Result<Response<users_sdk::proto::UserReply>, Status> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);

        let requested = request.into_inner().user_id;
        match self.user.lock().unwrap().clone() {
            Some(user) => Ok(Response::new(users_sdk::proto::UserReply {
                user: Some(user.into()),
            })),
            None => Err(domain_status(&DomainError::not_found("User", requested))),
        }
    }

    async fn delete_user(
        &self,
        request: Request<users_sdk::proto::DeleteUserRequest>,
    ) -> Result<Response<users_sdk::proto::DeleteUserReply>, Status> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);

        let _ = request.into_inner();
        if let Some(error) = self.delete_error.lock().unwrap().clone() {
            return Err(domain_status(&error));
        }
        Ok(Response::new(users_sdk::proto::DeleteUserReply {}))
    }
}

#[derive(Default)]
pub struct StubAddresses {
    pub addresses: Mutex<Vec<Address>>,
    pub list_error: Mutex<Option<DomainError>>,
    pub delete_errors: Mutex<HashMap<Uuid, DomainError>>,
    pub delete_delay: Mutex<Option<Duration>>,
    pub list_calls: AtomicUsize,
    pub delete_calls: Mutex<Vec<Uuid>>,
}

impl StubAddresses {
    pub fn holding(addresses: Vec<Address>) -> Arc<Self> {
        let stub = Self::default();
        *stub.addresses.lock().unwrap() = addresses;
        Arc::new(stub)
    }

    pub fn fail_delete_of(&self, id: Uuid, error: DomainError) {
        self.delete_errors.lock().unwrap().insert(id, error);
    }

    pub fn delay_deletes(&self, delay: Duration) {
        *self.delete_delay.lock().unwrap() = Some(delay);
    }

    pub fn deleted_ids(&self) -> Vec<Uuid> {
        self.delete_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl AddressService for StubAddresses {
    async fn create_address(
        &self,
        _request: Request<addresses_sdk::proto::CreateAddressRequest>,
    ) -> Result<Response<addresses_sdk::proto::AddressReply>, Status> {
        Err(Status::unimplemented("not scripted"))
    }

    async fn get_address(
        &self,
        _request: Request<addresses_sdk::proto::GetAddressRequest>,
    ) -> Result<Response<addresses_sdk::proto::AddressReply>, Status> {
        Err(Status::unimplemented("not scripted"))
    }

    async fn list_addresses(
        &self,
        _request: Request<addresses_sdk::proto::ListAddressesRequest>,
    ) -> Result<Response<addresses_sdk::proto::ListAddressesReply>, Status> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);

        if let Some(error) = self.list_error.lock().unwrap().clone() {
            return Err(domain_status(&error));
        }
        let addresses = self.addresses.lock().unwrap().clone();
        Ok(Response::new(addresses_sdk::proto::ListAddressesReply {
            addresses: addresses.into_iter().map(Into::into).collect(),
        }))
    }

    async fn delete_address(
        &self,
        request: Request<addresses_sdk::proto::DeleteAddressRequest>,
    ) -> Result<Response<addresses_sdk::proto::DeleteAddressReply>, Status> {
        let id = Uuid::parse_str(&request.into_inner().address_id).unwrap();
        self.delete_calls.lock().unwrap().push(id);

        let delay = *self.delete_delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if let Some(error) = self.delete_errors.lock().unwrap().get(&id).cloned() {
            return Err(domain_status(&error));
        }
        Ok(Response::new(addresses_sdk::proto::DeleteAddressReply {}))
    }
}

#[derive(Default)]
pub struct StubOrders {
    pub orders: Mutex<Vec<Order>>,
    pub cancel_errors: Mutex<HashMap<Uuid, DomainError>>,
    pub list_calls: AtomicUsize,
    pub cancel_calls: Mutex<Vec<Uuid>>,
    pub place_calls: AtomicUsize,
}

impl StubOrders {
    pub fn holding(orders: Vec<Order>) -> Arc<Self> {
        let stub = Self::default();
        *stub.orders.lock().unwrap() = orders;
        Arc::new(stub)
    }

    pub fn fail_cancel_of(&self, id: Uuid, error: DomainError) {
        self.cancel_errors.lock().unwrap().insert(id, error);
    }

    pub fn cancelled_ids(&self) -> Vec<Uuid> {
        self.cancel_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl OrderService for StubOrders {
    async fn place_order(
        &self,
        request: Request<orders_sdk::proto::PlaceOrderRequest>,
    ) -> Result<Response<orders_sdk::proto::OrderReply>, Status> {
        self.place_calls.fetch_add(1, Ordering::SeqCst);

        let req = request.into_inner();
        let placed = Order {
            id: Uuid::new_v4(),
            user_id: Uuid::parse_str(&req.user_id).unwrap(),
            product_id: Uuid::parse_str(&req.product_id).unwrap(),
            quantity: req.quantity,
            status: OrderStatus::Pending,
            placed_at: Utc::now(),
        };
        Ok(Response::new(orders_sdk::proto::OrderReply {
            order: Some(placed.into()),
        }))
    }

    async fn get_order(
        &self,
        _request: Request<orders_sdk::proto::GetOrderRequest>,
    ) -> Result<Response<orders_sdk::proto::OrderReply>, Status> {
        Err(Status::unimplemented("not scripted"))
    }

    async fn list_in_flight(
        &self,
        _request: Request<orders_sdk::proto::ListInFlightRequest>,
    ) -> Result<Response<orders_sdk::proto::ListOrdersReply>, Status> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);

        let orders = self.orders.lock().unwrap().clone();
        Ok(Response::new(orders_sdk::proto::ListOrdersReply {
            orders: orders.into_iter().map(Into::into).collect(),
        }))
    }

    async fn cancel_order(
        &self,
        request: Request<orders_sdk::proto::CancelOrderRequest>,
    ) -> Result<Response<orders_sdk::proto::OrderReply>, Status> {
        let id = Uuid::parse_str(&request.into_inner().order_id).unwrap();
        self.cancel_calls.lock().unwrap().push(id);

        if let Some(error) = self.cancel_errors.lock().unwrap().get(&id).cloned() {
            return Err(domain_status(&error));
        }

        let held = self.orders.lock().unwrap().clone();
        let mut cancelled = held
            .into_iter()
            .find(|order| order.id == id)
            .unwrap_or_else(|| order(Uuid::new_v4()));
        cancelled.status = OrderStatus::Cancelled;
        Ok(Response::new(orders_sdk::proto::OrderReply {
            order: Some(cancelled.into()),
        }))
    }
}

#[derive(Default)]
pub struct StubProducts {
    pub product: Mutex<Option<Product>>,
    pub get_calls: AtomicUsize,
}

impl StubProducts {
    pub fn holding(product: Product) -> Arc<Self> {
        let stub = Self::default();
        *stub.product.lock().unwrap() = Some(product);
        Arc::new(stub)
    }

    pub fn empty() -> Arc<Self> {
        Arc::new(Self::default())
    }
}

#[async_trait]
impl ProductService for StubProducts {
    async fn create_product(
        &self,
        _request: Request<products_sdk::proto::CreateProductRequest>,
    ) -> Result<Response<products_sdk::proto::ProductReply>, Status> {
        Err(Status::unimplemented("not scripted"))
    }

    async fn get_product(
        &self,
        request: Request<products_sdk::proto::GetProductRequest>,
    ) -> Result<Response<products_sdk::proto::ProductReply>, Status> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);

        let requested = request.into_inner().product_id;
        match self.product.lock().unwrap().clone() {
            Some(product) => Ok(Response::new(products_sdk::proto::ProductReply {
                product: Some(product.into()),
            })),
            None => Err(domain_status(&DomainError::not_found("Product", requested))),
        }
    }

    async fn delete_product(
        &self,
        _request: Request<products_sdk::proto::DeleteProductRequest>,
    ) -> Result<Response<products_sdk::proto::DeleteProductReply>, Status> {
        Err(Status::unimplemented("not scripted"))
    }
}

// ---------------------------------------------------------------------------
// assembly
// ---------------------------------------------------------------------------

pub fn gateway_over(
    users: Arc<StubUsers>,
    addresses: Arc<StubAddresses>,
    orders: Arc<StubOrders>,
    products: Arc<StubProducts>,
) -> gateway::Service {
    gateway::Service::new(
        UsersClient::new(users),
        AddressesClient::new(addresses),
        OrdersClient::new(orders),
        ProductsClient::new(products),
    )
}
