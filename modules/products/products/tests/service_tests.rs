#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Unit tests for the products domain service.

use std::sync::Arc;

use products::domain::Service;
use products::infra::storage::InMemoryProductsRepository;
use products_sdk::NewProduct;
use service_kernel::DomainError;
use uuid::Uuid;

fn service() -> (Service, Arc<InMemoryProductsRepository>) {
    let repo = Arc::new(InMemoryProductsRepository::new());
    (Service::new(repo.clone()), repo)
}

#[tokio::test]
async fn create_then_get_returns_the_product() {
    let (service, _repo) = service();

    let created = service
        .create_product(NewProduct {
            name: "Widget".to_owned(),
            price_cents: 1999,
        })
        .await
        .unwrap();

    let fetched = service.get_product(created.id).await.unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn non_positive_price_is_a_validation_error() {
    let (service, _repo) = service();

    for price in [0, -5] {
        let err = service
            .create_product(NewProduct {
                name: "Widget".to_owned(),
                price_cents: price,
            })
            .await
            .unwrap_err();
        assert!(
            matches!(err, DomainError::Validation { ref field, .. } if field == "price_cents"),
            "price {price} should be rejected"
        );
    }
}

#[tokio::test]
async fn duplicate_name_is_rejected() {
    let (service, _repo) = service();
    let new_product = NewProduct {
        name: "Widget".to_owned(),
        price_cents: 100,
    };

    service.create_product(new_product.clone()).await.unwrap();
    let err = service.create_product(new_product).await.unwrap_err();

    assert_eq!(err, DomainError::duplicate("Product", "name", "Widget"));
}

#[tokio::test]
async fn deleting_a_missing_product_is_not_found() {
    let (service, _repo) = service();
    let id = Uuid::new_v4();

    let err = service.delete_product(id).await.unwrap_err();
    assert_eq!(err, DomainError::not_found("Product", id));
}

#[tokio::test]
async fn poisoned_storage_surfaces_as_persistence_error() {
    let (service, repo) = service();
    repo.poison();

    let err = service.get_product(Uuid::new_v4()).await.unwrap_err();
    assert_eq!(err.code(), "PERSISTENCE_ERROR");
}
