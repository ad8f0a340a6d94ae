use async_trait::async_trait;
use tonic::{Request, Response, Status};

use crate::proto::{
    CreateUserRequest, DeleteUserReply, DeleteUserRequest, GetUserRequest, UserReply,
};

/// Unary RPC contract of the Users service.
///
/// Server implementations translate every failure through the error
/// interceptor before returning; a raw error never leaves as status text.
#[async_trait]
pub trait UserService: Send + Sync + 'static {
    async fn create_user(
        &self,
        request: Request<CreateUserRequest>,
    ) -> Result<Response<UserReply>, Status>;

    async fn get_user(
        &self,
        request: Request<GetUserRequest>,
    ) -> Result<Response<UserReply>, Status>;

    async fn delete_user(
        &self,
        request: Request<DeleteUserRequest>,
    ) -> Result<Response<DeleteUserReply>, Status>;
}
