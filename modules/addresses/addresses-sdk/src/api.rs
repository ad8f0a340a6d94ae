use async_trait::async_trait;
use tonic::{Request, Response, Status};

use crate::proto::{
    AddressReply, CreateAddressRequest, DeleteAddressReply, DeleteAddressRequest,
    GetAddressRequest, ListAddressesReply, ListAddressesRequest,
};

/// Unary RPC contract of the Addresses service.
#[async_trait]
pub trait AddressService: Send + Sync + 'static {
    async fn create_address(
        &self,
        request: Request<CreateAddressRequest>,
    ) -> Result<Response<AddressReply>, Status>;

    async fn get_address(
        &self,
        request: Request<GetAddressRequest>,
    ) -> Result<Response<AddressReply>, Status>;

    /// List every address owned by a user.
    async fn list_addresses(
        &self,
        request: Request<ListAddressesRequest>,
    ) -> Result<Response<ListAddressesReply>, Status>;

    async fn delete_address(
        &self,
        request: Request<DeleteAddressRequest>,
    ) -> Result<Response<DeleteAddressReply>, Status>;
}
