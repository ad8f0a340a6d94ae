use async_trait::async_trait;
use tonic::{Request, Response, Status};

use crate::proto::{
    CancelOrderRequest, GetOrderRequest, ListInFlightRequest, ListOrdersReply, OrderReply,
    PlaceOrderRequest,
};

/// Unary RPC contract of the Orders service.
#[async_trait]
pub trait OrderService: Send + Sync + 'static {
    async fn place_order(
        &self,
        request: Request<PlaceOrderRequest>,
    ) -> Result<Response<OrderReply>, Status>;

    async fn get_order(
        &self,
        request: Request<GetOrderRequest>,
    ) -> Result<Response<OrderReply>, Status>;

    /// List a user's orders that are still in flight (pending/processing).
    async fn list_in_flight(
        &self,
        request: Request<ListInFlightRequest>,
    ) -> Result<Response<ListOrdersReply>, Status>;

    /// Cancel an order. Cancelling an already-cancelled order succeeds.
    async fn cancel_order(
        &self,
        request: Request<CancelOrderRequest>,
    ) -> Result<Response<OrderReply>, Status>;
}
