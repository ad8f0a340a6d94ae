use std::sync::Arc;

use chrono::Utc;
use orders_sdk::{NewOrder, Order, OrderStatus};
use service_kernel::{DomainError, DomainResult};
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::domain::repo::OrdersRepository;

/// Domain service with business rules for the order lifecycle.
#[derive(Clone)]
pub struct Service {
    repo: Arc<dyn OrdersRepository>,
}

impl Service {
    pub fn new(repo: Arc<dyn OrdersRepository>) -> Self {
        Self { repo }
    }

    #[instrument(
        skip(self, new_order),
        fields(user_id = %new_order.user_id, product_id = %new_order.product_id)
    )]
    pub async fn place_order(&self, new_order: NewOrder) -> DomainResult<Order> {
        info!("Placing order");

        if new_order.user_id.is_nil() {
            return Err(DomainError::validation("user_id", "must not be nil"));
        }
        if new_order.product_id.is_nil() {
            return Err(DomainError::validation("product_id", "must not be nil"));
        }
        if new_order.quantity == 0 {
            return Err(DomainError::validation(
                "quantity",
                "must be greater than zero",
            ));
        }

        let order = Order {
            id: Uuid::new_v4(),
            user_id: new_order.user_id,
            product_id: new_order.product_id,
            quantity: new_order.quantity,
            status: OrderStatus::Pending,
            placed_at: Utc::now(),
        };
        self.repo.insert(order.clone()).await?;

        info!(order_id = %order.id, "Successfully placed order");
        Ok(order)
    }

    #[instrument(skip(self), fields(order_id = %id))]
    pub async fn get_order(&self, id: Uuid) -> DomainResult<Order> {
        debug!("Getting order by id");

        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Order", id))
    }

    #[instrument(skip(self), fields(user_id = %user_id))]
    pub async fn list_in_flight(&self, user_id: Uuid) -> DomainResult<Vec<Order>> {
        debug!("Listing in-flight orders for user");

        let orders = self.repo.list_in_flight_by_user(user_id).await?;
        debug!("Found {} in-flight orders", orders.len());
        Ok(orders)
    }

    /// Cancel an order.
    ///
    /// Cancelling an already-cancelled order is a no-op success, so the
    /// cleanup step of a larger workflow can be retried safely. Terminal
    /// fulfilment states cannot be cancelled.
    #[instrument(skip(self), fields(order_id = %id))]
    pub async fn cancel_order(&self, id: Uuid) -> DomainResult<Order> {
        info!("Cancelling order");

        let mut order = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Order", id))?;

        match order.status {
            OrderStatus::Cancelled => {
                debug!("Order already cancelled");
                return Ok(order);
            }
            OrderStatus::Shipped => {
                return Err(DomainError::validation(
                    "status",
                    "a shipped order cannot be cancelled",
                ));
            }
            OrderStatus::Delivered => {
                return Err(DomainError::validation(
                    "status",
                    "a delivered order cannot be cancelled",
                ));
            }
            OrderStatus::Pending | OrderStatus::Processing => {}
        }

        order.status = OrderStatus::Cancelled;
        self.repo.update(order.clone()).await?;

        info!("Successfully cancelled order");
        Ok(order)
    }
}
