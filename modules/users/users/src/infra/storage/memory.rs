use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;
use service_kernel::{DomainError, DomainResult};
use users_sdk::User;
use uuid::Uuid;

use crate::domain::repo::UsersRepository;

/// In-memory user store.
///
/// The persistence schema is owned elsewhere; this adapter keeps the
/// repository seam honest for wiring and tests. `poison` flips every
/// subsequent operation into a persistence failure.
#[derive(Debug, Default)]
pub struct InMemoryUsersRepository {
    users: DashMap<Uuid, User>,
    poisoned: AtomicBool,
}

impl InMemoryUsersRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent operation fail with a persistence error.
    pub fn poison(&self) {
        self.poisoned.store(true, Ordering::SeqCst);
    }

    fn check(&self) -> DomainResult<()> {
        if self.poisoned.load(Ordering::SeqCst) {
            return Err(DomainError::persistence("simulated storage failure"));
        }
        Ok(())
    }
}

#[async_trait]
impl UsersRepository for InMemoryUsersRepository {
    async fn insert(&self, user: User) -> DomainResult<()> {
        self.check()?;
        self.users.insert(user.id, user);
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<User>> {
        self.check()?;
        Ok(self.users.get(&id).map(|entry| entry.value().clone()))
    }

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        self.check()?;
        Ok(self
            .users
            .iter()
            .find(|entry| entry.email == email)
            .map(|entry| entry.value().clone()))
    }

    async fn delete(&self, id: Uuid) -> DomainResult<bool> {
        self.check()?;
        Ok(self.users.remove(&id).is_some())
    }
}
