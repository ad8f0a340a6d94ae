use async_trait::async_trait;
use tonic::{Request, Response, Status};

use crate::proto::{
    CreateProductRequest, DeleteProductReply, DeleteProductRequest, GetProductRequest,
    ProductReply,
};

/// Unary RPC contract of the Products service.
#[async_trait]
pub trait ProductService: Send + Sync + 'static {
    async fn create_product(
        &self,
        request: Request<CreateProductRequest>,
    ) -> Result<Response<ProductReply>, Status>;

    async fn get_product(
        &self,
        request: Request<GetProductRequest>,
    ) -> Result<Response<ProductReply>, Status>;

    async fn delete_product(
        &self,
        request: Request<DeleteProductRequest>,
    ) -> Result<Response<DeleteProductReply>, Status>;
}
