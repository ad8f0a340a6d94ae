//! RPC server implementation for the Orders service.

use std::sync::Arc;

use async_trait::async_trait;
use orders_sdk::proto::{
    CancelOrderRequest, GetOrderRequest, ListInFlightRequest, ListOrdersReply, OrderReply,
    PlaceOrderRequest,
};
use orders_sdk::{NewOrder, OrderService};
use service_kernel::DomainError;
use tonic::{Request, Response, Status};
use transport_grpc::status::domain_status;
use uuid::Uuid;

use crate::domain::Service;

#[derive(Clone)]
pub struct OrderServiceImpl {
    service: Arc<Service>,
}

impl OrderServiceImpl {
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

fn parse_id(raw: &str, field: &'static str) -> Result<Uuid, Status> {
    Uuid::parse_str(raw)
        .map_err(|_| domain_status(&DomainError::validation(field, "must be a UUID")))
}

#[async_trait]
impl OrderService for OrderServiceImpl {
    async fn place_order(
        &self,
        request: Request<PlaceOrderRequest>,
    ) -> Result<Response<OrderReply>, Status> {
        let req = request.into_inner();
        let user_id = parse_id(&req.user_id, "user_id")?;
        let product_id = parse_id(&req.product_id, "product_id")?;

        let order = self
            .service
            .place_order(NewOrder {
                user_id,
                product_id,
                quantity: req.quantity,
            })
            .await
            .map_err(|e| domain_status(&e))?;

        Ok(Response::new(OrderReply {
            order: Some(order.into()),
        }))
    }

    async fn get_order(
        &self,
        request: Request<GetOrderRequest>,
    ) -> Result<Response<OrderReply>, Status> {
        let id = parse_id(&request.into_inner().order_id, "order_id")?;

        let order = self
            .service
            .get_order(id)
            .await
            .map_err(|e| domain_status(&e))?;

        Ok(Response::new(OrderReply {
            order: Some(order.into()),
        }))
    }

    async fn list_in_flight(
        &self,
        request: Request<ListInFlightRequest>,
    ) -> Result<Response<ListOrdersReply>, Status> {
        let user_id = parse_id(&request.into_inner().user_id, "user_id")?;

        let orders = self
            .service
            .list_in_flight(user_id)
            .await
            .map_err(|e| domain_status(&e))?;

        Ok(Response::new(ListOrdersReply {
            orders: orders.into_iter().map(Into::into).collect(),
        }))
    }

    async fn cancel_order(
        &self,
        request: Request<CancelOrderRequest>,
    ) -> Result<Response<OrderReply>, Status> {
        let id = parse_id(&request.into_inner().order_id, "order_id")?;

        let order = self
            .service
            .cancel_order(id)
            .await
            .map_err(|e| domain_status(&e))?;

        Ok(Response::new(OrderReply {
            order: Some(order.into()),
        }))
    }
}
