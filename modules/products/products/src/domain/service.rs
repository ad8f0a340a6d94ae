use std::sync::Arc;

use chrono::Utc;
use products_sdk::{NewProduct, Product};
use service_kernel::{DomainError, DomainResult};
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::domain::repo::ProductsRepository;

/// Domain service with business rules for the product catalogue.
#[derive(Clone)]
pub struct Service {
    repo: Arc<dyn ProductsRepository>,
}

impl Service {
    pub fn new(repo: Arc<dyn ProductsRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self, new_product), fields(name = %new_product.name))]
    pub async fn create_product(&self, new_product: NewProduct) -> DomainResult<Product> {
        info!("Creating new product");

        let name = new_product.name.trim().to_owned();
        if name.is_empty() {
            return Err(DomainError::validation("name", "must not be empty"));
        }
        if new_product.price_cents <= 0 {
            return Err(DomainError::validation(
                "price_cents",
                "must be greater than zero",
            ));
        }

        if self.repo.find_by_name(&name).await?.is_some() {
            return Err(DomainError::duplicate("Product", "name", name));
        }

        let product = Product {
            id: Uuid::new_v4(),
            name,
            price_cents: new_product.price_cents,
            created_at: Utc::now(),
        };
        self.repo.insert(product.clone()).await?;

        info!(product_id = %product.id, "Successfully created product");
        Ok(product)
    }

    #[instrument(skip(self), fields(product_id = %id))]
    pub async fn get_product(&self, id: Uuid) -> DomainResult<Product> {
        debug!("Getting product by id");

        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Product", id))
    }

    #[instrument(skip(self), fields(product_id = %id))]
    pub async fn delete_product(&self, id: Uuid) -> DomainResult<()> {
        info!("Deleting product");

        let deleted = self.repo.delete(id).await?;
        if !deleted {
            return Err(DomainError::not_found("Product", id));
        }

        info!("Successfully deleted product");
        Ok(())
    }
}
