use std::sync::Arc;

use chrono::Utc;
use service_kernel::{DomainError, DomainResult};
use tracing::{debug, info, instrument};
use users_sdk::{NewUser, User};
use uuid::Uuid;

use crate::domain::repo::UsersRepository;

/// Domain service with business rules for user accounts.
/// Depends only on the repository port.
#[derive(Clone)]
pub struct Service {
    repo: Arc<dyn UsersRepository>,
    config: ServiceConfig,
}

/// Configuration for the domain service.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub max_display_name_length: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            max_display_name_length: 100,
        }
    }
}

impl Service {
    pub fn new(repo: Arc<dyn UsersRepository>, config: ServiceConfig) -> Self {
        Self { repo, config }
    }

    #[instrument(
        skip(self, new_user),
        fields(email = %new_user.email, display_name = %new_user.display_name)
    )]
    pub async fn create_user(&self, new_user: NewUser) -> DomainResult<User> {
        info!("Creating new user");

        self.validate_new_user(&new_user)?;

        if self.repo.find_by_email(&new_user.email).await?.is_some() {
            return Err(DomainError::duplicate("User", "email", new_user.email));
        }

        let user = User {
            id: Uuid::new_v4(),
            email: new_user.email,
            display_name: new_user.display_name,
            created_at: Utc::now(),
        };
        self.repo.insert(user.clone()).await?;

        info!(user_id = %user.id, "Successfully created user");
        Ok(user)
    }

    #[instrument(skip(self), fields(user_id = %id))]
    pub async fn get_user(&self, id: Uuid) -> DomainResult<User> {
        debug!("Getting user by id");

        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("User", id))
    }

    #[instrument(skip(self), fields(user_id = %id))]
    pub async fn delete_user(&self, id: Uuid) -> DomainResult<()> {
        info!("Deleting user");

        let deleted = self.repo.delete(id).await?;
        if !deleted {
            return Err(DomainError::not_found("User", id));
        }

        info!("Successfully deleted user");
        Ok(())
    }

    fn validate_new_user(&self, new_user: &NewUser) -> DomainResult<()> {
        let email = new_user.email.trim();
        if email.is_empty() {
            return Err(DomainError::validation("email", "must not be empty"));
        }
        if !email.contains('@') || email.starts_with('@') || email.ends_with('@') {
            return Err(DomainError::validation("email", "is not a valid address"));
        }

        let name = new_user.display_name.trim();
        if name.is_empty() {
            return Err(DomainError::validation("display_name", "must not be empty"));
        }
        if name.len() > self.config.max_display_name_length {
            return Err(DomainError::validation(
                "display_name",
                format!(
                    "must be at most {} characters",
                    self.config.max_display_name_length
                ),
            ));
        }

        Ok(())
    }
}
