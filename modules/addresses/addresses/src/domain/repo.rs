use addresses_sdk::Address;
use async_trait::async_trait;
use service_kernel::DomainResult;
use uuid::Uuid;

/// Repository trait for address persistence operations.
#[async_trait]
pub trait AddressesRepository: Send + Sync {
    async fn insert(&self, address: Address) -> DomainResult<()>;

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Address>>;

    /// All addresses owned by the given user.
    async fn list_by_user(&self, user_id: Uuid) -> DomainResult<Vec<Address>>;

    /// Delete an address by ID; returns whether a row was removed.
    async fn delete(&self, id: Uuid) -> DomainResult<bool>;
}
