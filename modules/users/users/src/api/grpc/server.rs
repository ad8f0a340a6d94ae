//! RPC server implementation for the Users service.
//!
//! Thin wrapper over the domain [`Service`]; every failure leaves through
//! the error translation layer, never as raw error text.

use std::sync::Arc;

use async_trait::async_trait;
use service_kernel::DomainError;
use tonic::{Request, Response, Status};
use transport_grpc::status::domain_status;
use users_sdk::proto::{
    CreateUserRequest, DeleteUserReply, DeleteUserRequest, GetUserRequest, UserReply,
};
use users_sdk::{NewUser, UserService};
use uuid::Uuid;

use crate::domain::Service;

/// RPC service implementation that wraps the domain Service.
#[derive(Clone)]
pub struct UserServiceImpl {
    service: Arc<Service>,
}

impl UserServiceImpl {
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

fn parse_id(raw: &str, field: &'static str) -> Result<Uuid, Status> {
    Uuid::parse_str(raw)
        .map_err(|_| domain_status(&DomainError::validation(field, "must be a UUID")))
}

#[async_trait]
impl UserService for UserServiceImpl {
    async fn create_user(
        &self,
        request: Request<CreateUserRequest>,
    ) -> Result<Response<UserReply>, Status> {
        let req = request.into_inner();

        let user = self
            .service
            .create_user(NewUser {
                email: req.email,
                display_name: req.display_name,
            })
            .await
            .map_err(|e| domain_status(&e))?;

        Ok(Response::new(UserReply {
            user: Some(user.into()),
        }))
    }

    async fn get_user(
        &self,
        request: Request<GetUserRequest>,
    ) -> Result<Response<UserReply>, Status> {
        let id = parse_id(&request.into_inner().user_id, "user_id")?;

        let user = self
            .service
            .get_user(id)
            .await
            .map_err(|e| domain_status(&e))?;

        Ok(Response::new(UserReply {
            user: Some(user.into()),
        }))
    }

    async fn delete_user(
        &self,
        request: Request<DeleteUserRequest>,
    ) -> Result<Response<DeleteUserReply>, Status> {
        let id = parse_id(&request.into_inner().user_id, "user_id")?;

        self.service
            .delete_user(id)
            .await
            .map_err(|e| domain_status(&e))?;

        Ok(Response::new(DeleteUserReply {}))
    }
}
