//! RPC server implementation for the Addresses service.

use std::sync::Arc;

use addresses_sdk::proto::{
    AddressReply, CreateAddressRequest, DeleteAddressReply, DeleteAddressRequest,
    GetAddressRequest, ListAddressesReply, ListAddressesRequest,
};
use addresses_sdk::{AddressService, NewAddress};
use async_trait::async_trait;
use service_kernel::DomainError;
use tonic::{Request, Response, Status};
use transport_grpc::status::domain_status;
use uuid::Uuid;

use crate::domain::Service;

#[derive(Clone)]
pub struct AddressServiceImpl {
    service: Arc<Service>,
}

impl AddressServiceImpl {
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

fn parse_id(raw: &str, field: &'static str) -> Result<Uuid, Status> {
    Uuid::parse_str(raw)
        .map_err(|_| domain_status(&DomainError::validation(field, "must be a UUID")))
}

#[async_trait]
impl AddressService for AddressServiceImpl {
    async fn create_address(
        &self,
        request: Request<CreateAddressRequest>,
    ) -> Result<Response<AddressReply>, Status> {
        let req = request.into_inner();
        let user_id = parse_id(&req.user_id, "user_id")?;

        let address = self
            .service
            .create_address(NewAddress {
                user_id,
                street: req.street,
                city: req.city,
                postal_code: req.postal_code,
            })
            .await
            .map_err(|e| domain_status(&e))?;

        Ok(Response::new(AddressReply {
            address: Some(address.into()),
        }))
    }

    async fn get_address(
        &self,
        request: Request<GetAddressRequest>,
    ) -> Result<Response<AddressReply>, Status> {
        let id = parse_id(&request.into_inner().address_id, "address_id")?;

        let address = self
            .service
            .get_address(id)
            .await
            .map_err(|e| domain_status(&e))?;

        Ok(Response::new(AddressReply {
            address: Some(address.into()),
        }))
    }

    async fn list_addresses(
        &self,
        request: Request<ListAddressesRequest>,
    ) -> Result<Response<ListAddressesReply>, Status> {
        let user_id = parse_id(&request.into_inner().user_id, "user_id")?;

        let addresses = self
            .service
            .list_by_user(user_id)
            .await
            .map_err(|e| domain_status(&e))?;

        Ok(Response::new(ListAddressesReply {
            addresses: addresses.into_iter().map(Into::into).collect(),
        }))
    }

    async fn delete_address(
        &self,
        request: Request<DeleteAddressRequest>,
    ) -> Result<Response<DeleteAddressReply>, Status> {
        let id = parse_id(&request.into_inner().address_id, "address_id")?;

        self.service
            .delete_address(id)
            .await
            .map_err(|e| domain_status(&e))?;

        Ok(Response::new(DeleteAddressReply {}))
    }
}
