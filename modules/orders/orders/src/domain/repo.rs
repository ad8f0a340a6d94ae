use async_trait::async_trait;
use orders_sdk::Order;
use service_kernel::DomainResult;
use uuid::Uuid;

/// Repository trait for order persistence operations.
#[async_trait]
pub trait OrdersRepository: Send + Sync {
    async fn insert(&self, order: Order) -> DomainResult<()>;

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Order>>;

    /// Orders for the user that are still pending or processing.
    async fn list_in_flight_by_user(&self, user_id: Uuid) -> DomainResult<Vec<Order>>;

    /// Replace a stored order with an updated snapshot.
    async fn update(&self, order: Order) -> DomainResult<()>;
}
