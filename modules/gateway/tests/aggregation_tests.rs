#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Gateway read aggregation and the verify-then-mutate order placement.

mod support;

use std::sync::atomic::Ordering;

use gateway::{Step, WorkflowError};
use service_kernel::codes;
use tokio_util::sync::CancellationToken;

use support::{address, gateway_over, order, product, user, StubAddresses, StubOrders, StubProducts, StubUsers};

#[tokio::test]
async fn overview_joins_user_addresses_and_in_flight_orders() {
    let owner = user();
    let home = address(owner.id);
    let in_flight = order(owner.id);

    let gateway = gateway_over(
        StubUsers::holding(owner.clone()),
        StubAddresses::holding(vec![home.clone()]),
        StubOrders::holding(vec![in_flight.clone()]),
        StubProducts::empty(),
    );

    let overview = gateway
        .user_overview(&CancellationToken::new(), &owner.id.to_string())
        .await
        .unwrap();

    assert_eq!(overview.user.id, owner.id);
    assert_eq!(overview.addresses, vec![home]);
    assert_eq!(overview.in_flight_orders, vec![in_flight]);
}

#[tokio::test]
async fn overview_of_a_missing_user_names_the_user_step() {
    let owner = user();

    let gateway = gateway_over(
        StubUsers::empty(),
        StubAddresses::holding(vec![]),
        StubOrders::holding(vec![]),
        StubProducts::empty(),
    );

    let err = gateway
        .user_overview(&CancellationToken::new(), &owner.id.to_string())
        .await
        .unwrap_err();

    assert_eq!(err.step(), Some(Step::GetUser));
    assert_eq!(err.error_info().code, codes::NOT_FOUND);
}

#[tokio::test]
async fn order_placement_verifies_then_places() {
    let buyer = user();
    let item = product();

    let orders = StubOrders::holding(vec![]);
    let gateway = gateway_over(
        StubUsers::holding(buyer.clone()),
        StubAddresses::holding(vec![]),
        orders.clone(),
        StubProducts::holding(item.clone()),
    );

    let placed = gateway
        .place_order(
            &CancellationToken::new(),
            &buyer.id.to_string(),
            &item.id.to_string(),
            3,
        )
        .await
        .unwrap();

    assert_eq!(placed.quantity, 3);
    assert_eq!(orders.place_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn missing_product_blocks_the_mutation() {
    let buyer = user();

    let orders = StubOrders::holding(vec![]);
    let gateway = gateway_over(
        StubUsers::holding(buyer.clone()),
        StubAddresses::holding(vec![]),
        orders.clone(),
        StubProducts::empty(),
    );

    let err = gateway
        .place_order(
            &CancellationToken::new(),
            &buyer.id.to_string(),
            &uuid::Uuid::new_v4().to_string(),
            1,
        )
        .await
        .unwrap_err();

    assert_eq!(err.step(), Some(Step::GetProduct));
    // The verification reads failed, so the order must never be placed.
    assert_eq!(orders.place_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn zero_quantity_fails_fast() {
    let buyer = user();
    let item = product();

    let users = StubUsers::holding(buyer.clone());
    let gateway = gateway_over(
        users.clone(),
        StubAddresses::holding(vec![]),
        StubOrders::holding(vec![]),
        StubProducts::holding(item.clone()),
    );

    let err = gateway
        .place_order(
            &CancellationToken::new(),
            &buyer.id.to_string(),
            &item.id.to_string(),
            0,
        )
        .await
        .unwrap_err();

    assert!(matches!(err, WorkflowError::InvalidRequest(_)));
    assert_eq!(users.get_calls.load(Ordering::SeqCst), 0);
}
