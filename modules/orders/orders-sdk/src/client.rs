use std::sync::Arc;

use chrono::{TimeZone, Utc};
use service_kernel::{codes, CallError, ErrorInfo, ServiceResult};
use tokio_util::sync::CancellationToken;
use tonic::Request;
use transport_grpc::call::unary;
use transport_grpc::client::ClientConfig;
use transport_grpc::status::decode_failure;
use uuid::Uuid;

use crate::api::OrderService;
use crate::model::{NewOrder, Order, OrderStatus};
use crate::proto;

/// Client for the Orders bounded context.
#[derive(Clone)]
pub struct OrdersClient {
    inner: Arc<dyn OrderService>,
    config: Arc<ClientConfig>,
}

impl OrdersClient {
    pub fn new(inner: Arc<dyn OrderService>) -> Self {
        Self::with_config(inner, ClientConfig::new("orders"))
    }

    pub fn with_config(inner: Arc<dyn OrderService>, config: ClientConfig) -> Self {
        Self {
            inner,
            config: Arc::new(config),
        }
    }

    pub async fn place_order(
        &self,
        cancel: &CancellationToken,
        new_order: NewOrder,
    ) -> ServiceResult<Order> {
        let request = Request::new(proto::PlaceOrderRequest {
            user_id: new_order.user_id.to_string(),
            product_id: new_order.product_id.to_string(),
            quantity: new_order.quantity,
        });

        let response = unary(
            cancel,
            self.config.call_deadline,
            self.inner.place_order(request),
        )
        .await
        .map_err(|status| decode_failure(&status))?;

        decode_order(response.into_inner().order)
    }

    pub async fn get_order(&self, cancel: &CancellationToken, id: Uuid) -> ServiceResult<Order> {
        let request = Request::new(proto::GetOrderRequest {
            order_id: id.to_string(),
        });

        let response = unary(
            cancel,
            self.config.call_deadline,
            self.inner.get_order(request),
        )
        .await
        .map_err(|status| decode_failure(&status))?;

        decode_order(response.into_inner().order)
    }

    pub async fn list_in_flight(
        &self,
        cancel: &CancellationToken,
        user_id: Uuid,
    ) -> ServiceResult<Vec<Order>> {
        let request = Request::new(proto::ListInFlightRequest {
            user_id: user_id.to_string(),
        });

        let response = unary(
            cancel,
            self.config.call_deadline,
            self.inner.list_in_flight(request),
        )
        .await
        .map_err(|status| decode_failure(&status))?;

        response
            .into_inner()
            .orders
            .into_iter()
            .map(|msg| decode_order(Some(msg)))
            .collect()
    }

    pub async fn cancel_order(&self, cancel: &CancellationToken, id: Uuid) -> ServiceResult<Order> {
        let request = Request::new(proto::CancelOrderRequest {
            order_id: id.to_string(),
        });

        let response = unary(
            cancel,
            self.config.call_deadline,
            self.inner.cancel_order(request),
        )
        .await
        .map_err(|status| decode_failure(&status))?;

        decode_order(response.into_inner().order)
    }
}

fn decode_order(msg: Option<proto::Order>) -> ServiceResult<Order> {
    let msg = msg.ok_or_else(|| malformed("missing order payload"))?;

    let id = Uuid::parse_str(&msg.id).map_err(|_| malformed("order id is not a UUID"))?;
    let user_id = Uuid::parse_str(&msg.user_id).map_err(|_| malformed("user id is not a UUID"))?;
    let product_id =
        Uuid::parse_str(&msg.product_id).map_err(|_| malformed("product id is not a UUID"))?;
    let status = decode_status(msg.status)?;
    let placed_at = Utc
        .timestamp_millis_opt(msg.placed_at_unix_ms)
        .single()
        .ok_or_else(|| malformed("placed_at out of range"))?;

    Ok(Order {
        id,
        user_id,
        product_id,
        quantity: msg.quantity,
        status,
        placed_at,
    })
}

fn decode_status(raw: i32) -> ServiceResult<OrderStatus> {
    match proto::OrderStatus::try_from(raw) {
        Ok(proto::OrderStatus::Pending) => Ok(OrderStatus::Pending),
        Ok(proto::OrderStatus::Processing) => Ok(OrderStatus::Processing),
        Ok(proto::OrderStatus::Shipped) => Ok(OrderStatus::Shipped),
        Ok(proto::OrderStatus::Delivered) => Ok(OrderStatus::Delivered),
        Ok(proto::OrderStatus::Cancelled) => Ok(OrderStatus::Cancelled),
        Ok(proto::OrderStatus::Unspecified) | Err(_) => Err(malformed("unknown order status")),
    }
}

fn malformed(detail: &str) -> CallError {
    tracing::warn!(detail, "malformed reply from orders service");
    CallError::Infrastructure(ErrorInfo::new(
        codes::INTERNAL,
        format!("malformed response: {detail}"),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_status_values_are_rejected() {
        assert!(decode_status(42).is_err());
        assert!(decode_status(0).is_err());
        assert_eq!(decode_status(1), Ok(OrderStatus::Pending));
    }
}
