use async_trait::async_trait;
use products_sdk::Product;
use service_kernel::DomainResult;
use uuid::Uuid;

/// Repository trait for product persistence operations.
#[async_trait]
pub trait ProductsRepository: Send + Sync {
    async fn insert(&self, product: Product) -> DomainResult<()>;

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Product>>;

    async fn find_by_name(&self, name: &str) -> DomainResult<Option<Product>>;

    /// Delete a product by ID; returns whether a row was removed.
    async fn delete(&self, id: Uuid) -> DomainResult<bool>;
}
