use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;
use products_sdk::Product;
use service_kernel::{DomainError, DomainResult};
use uuid::Uuid;

use crate::domain::repo::ProductsRepository;

/// In-memory product store with a poison switch for failure-path tests.
#[derive(Debug, Default)]
pub struct InMemoryProductsRepository {
    products: DashMap<Uuid, Product>,
    poisoned: AtomicBool,
}

impl InMemoryProductsRepository {
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
impl ProductsRepository for InMemoryProductsRepository {
    async fn insert(&self, product: Product) -> DomainResult<()> {
        self.check()?;
        self.products.insert(product.id, product);
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Product>> {
        self.check()?;
        Ok(self.products.get(&id).map(|entry| entry.value().clone()))
    }

    async fn find_by_name(&self, name: &str) -> DomainResult<Option<Product>> {
        self.check()?;
        Ok(self
            .products
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.value().clone()))
    }

    async fn delete(&self, id: Uuid) -> DomainResult<bool> {
        self.check()?;
        Ok(self.products.remove(&id).is_some())
    }
}
