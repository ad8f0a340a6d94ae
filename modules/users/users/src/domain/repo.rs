use async_trait::async_trait;
use service_kernel::DomainResult;
use users_sdk::User;
use uuid::Uuid;

/// Repository trait for user persistence operations.
#[async_trait]
pub trait UsersRepository: Send + Sync {
    async fn insert(&self, user: User) -> DomainResult<()>;

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<User>>;

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>>;

    /// Delete a user by ID; returns whether a row was removed.
    async fn delete(&self, id: Uuid) -> DomainResult<bool>;
}
