use std::sync::Arc;

use addresses_sdk::{Address, NewAddress};
use chrono::Utc;
use service_kernel::{DomainError, DomainResult};
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::domain::repo::AddressesRepository;

/// Domain service with business rules for postal addresses.
#[derive(Clone)]
pub struct Service {
    repo: Arc<dyn AddressesRepository>,
}

impl Service {
    pub fn new(repo: Arc<dyn AddressesRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self, new_address), fields(user_id = %new_address.user_id))]
    pub async fn create_address(&self, new_address: NewAddress) -> DomainResult<Address> {
        info!("Creating new address");

        validate(&new_address)?;

        let address = Address {
            id: Uuid::new_v4(),
            user_id: new_address.user_id,
            street: new_address.street,
            city: new_address.city,
            postal_code: new_address.postal_code,
            created_at: Utc::now(),
        };
        self.repo.insert(address.clone()).await?;

        info!(address_id = %address.id, "Successfully created address");
        Ok(address)
    }

    #[instrument(skip(self), fields(address_id = %id))]
    pub async fn get_address(&self, id: Uuid) -> DomainResult<Address> {
        debug!("Getting address by id");

        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Address", id))
    }

    #[instrument(skip(self), fields(user_id = %user_id))]
    pub async fn list_by_user(&self, user_id: Uuid) -> DomainResult<Vec<Address>> {
        debug!("Listing addresses for user");

        let addresses = self.repo.list_by_user(user_id).await?;
        debug!("Found {} addresses", addresses.len());
        Ok(addresses)
    }

    #[instrument(skip(self), fields(address_id = %id))]
    pub async fn delete_address(&self, id: Uuid) -> DomainResult<()> {
        info!("Deleting address");

        let deleted = self.repo.delete(id).await?;
        if !deleted {
            return Err(DomainError::not_found("Address", id));
        }

        info!("Successfully deleted address");
        Ok(())
    }
}

fn validate(new_address: &NewAddress) -> DomainResult<()> {
    if new_address.user_id.is_nil() {
        return Err(DomainError::validation("user_id", "must not be nil"));
    }
    for (field, value) in [
        ("street", &new_address.street),
        ("city", &new_address.city),
        ("postal_code", &new_address.postal_code),
    ] {
        if value.trim().is_empty() {
            return Err(DomainError::validation(field, "must not be empty"));
        }
    }
    Ok(())
}
