#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Unit tests for the users domain service.

use std::sync::Arc;

use service_kernel::DomainError;
use users::domain::{Service, ServiceConfig};
use users::infra::storage::InMemoryUsersRepository;
use users_sdk::NewUser;
use uuid::Uuid;

fn service() -> (Service, Arc<InMemoryUsersRepository>) {
    let repo = Arc::new(InMemoryUsersRepository::new());
    (
        Service::new(repo.clone(), ServiceConfig::default()),
        repo,
    )
}

fn new_user(email: &str) -> NewUser {
    NewUser {
        email: email.to_owned(),
        display_name: "Alice".to_owned(),
    }
}

#[tokio::test]
async fn create_then_get_returns_the_user() {
    let (service, _repo) = service();

    let created = service.create_user(new_user("alice@example.com")).await.unwrap();
    let fetched = service.get_user(created.id).await.unwrap();

    assert_eq!(fetched, created);
}

#[tokio::test]
async fn invalid_email_is_a_validation_error() {
    let (service, _repo) = service();

    for bad in ["", "no-at-sign", "@leading", "trailing@"] {
        let err = service.create_user(new_user(bad)).await.unwrap_err();
        assert!(
            matches!(err, DomainError::Validation { ref field, .. } if field == "email"),
            "email {bad:?} should be rejected, got {err:?}"
        );
    }
}

#[tokio::test]
async fn overlong_display_name_is_rejected() {
    let (service, _repo) = service();

    let err = service
        .create_user(NewUser {
            email: "bob@example.com".to_owned(),
            display_name: "x".repeat(101),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::Validation { ref field, .. } if field == "display_name"));
}

#[tokio::test]
async fn duplicate_email_is_rejected_with_the_conflicting_value() {
    let (service, _repo) = service();

    service.create_user(new_user("carol@example.com")).await.unwrap();
    let err = service.create_user(new_user("carol@example.com")).await.unwrap_err();

    assert_eq!(
        err,
        DomainError::duplicate("User", "email", "carol@example.com")
    );
}

#[tokio::test]
async fn missing_user_yields_not_found_with_the_id() {
    let (service, _repo) = service();
    let id = Uuid::new_v4();

    let err = service.get_user(id).await.unwrap_err();
    assert_eq!(err, DomainError::not_found("User", id));

    let err = service.delete_user(id).await.unwrap_err();
    assert_eq!(err.code(), "NOT_FOUND");
}

#[tokio::test]
async fn poisoned_storage_surfaces_as_persistence_error() {
    let (service, repo) = service();
    repo.poison();

    let err = service.get_user(Uuid::new_v4()).await.unwrap_err();
    assert_eq!(err.code(), "PERSISTENCE_ERROR");
}
