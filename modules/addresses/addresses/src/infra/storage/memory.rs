use std::sync::atomic::{AtomicBool, Ordering};

use addresses_sdk::Address;
use async_trait::async_trait;
use dashmap::DashMap;
use service_kernel::{DomainError, DomainResult};
use uuid::Uuid;

use crate::domain::repo::AddressesRepository;

/// In-memory address store with a poison switch for failure-path tests.
#[derive(Debug, Default)]
pub struct InMemoryAddressesRepository {
    addresses: DashMap<Uuid, Address>,
    poisoned: AtomicBool,
}

impl InMemoryAddressesRepository {
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
impl AddressesRepository for InMemoryAddressesRepository {
    async fn insert(&self, address: Address) -> DomainResult<()> {
        self.check()?;
        self.addresses.insert(address.id, address);
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Address>> {
        self.check()?;
        Ok(self.addresses.get(&id).map(|entry| entry.value().clone()))
    }

    async fn list_by_user(&self, user_id: Uuid) -> DomainResult<Vec<Address>> {
        self.check()?;
        Ok(self
            .addresses
            .iter()
            .filter(|entry| entry.user_id == user_id)
            .map(|entry| entry.value().clone())
            .collect())
    }

    async fn delete(&self, id: Uuid) -> DomainResult<bool> {
        self.check()?;
        Ok(self.addresses.remove(&id).is_some())
    }
}
