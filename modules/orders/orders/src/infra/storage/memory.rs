use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;
use orders_sdk::Order;
use service_kernel::{DomainError, DomainResult};
use uuid::Uuid;

use crate::domain::repo::OrdersRepository;

/// In-memory order store with a poison switch for failure-path tests.
#[derive(Debug, Default)]
pub struct InMemoryOrdersRepository {
    orders: DashMap<Uuid, Order>,
    poisoned: AtomicBool,
}

impl InMemoryOrdersRepository {
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
impl OrdersRepository for InMemoryOrdersRepository {
    async fn insert(&self, order: Order) -> DomainResult<()> {
        self.check()?;
        self.orders.insert(order.id, order);
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Order>> {
        self.check()?;
        Ok(self.orders.get(&id).map(|entry| entry.value().clone()))
    }

    async fn list_in_flight_by_user(&self, user_id: Uuid) -> DomainResult<Vec<Order>> {
        self.check()?;
        Ok(self
            .orders
            .iter()
            .filter(|entry| entry.user_id == user_id && entry.status.is_in_flight())
            .map(|entry| entry.value().clone())
            .collect())
    }

    async fn update(&self, order: Order) -> DomainResult<()> {
        self.check()?;
        if !self.orders.contains_key(&order.id) {
            return Err(DomainError::not_found("Order", order.id));
        }
        self.orders.insert(order.id, order);
        Ok(())
    }
}
