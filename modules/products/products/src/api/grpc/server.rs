//! RPC server implementation for the Products service.

use std::sync::Arc;

use async_trait::async_trait;
use products_sdk::proto::{
    CreateProductRequest, DeleteProductReply, DeleteProductRequest, GetProductRequest,
    ProductReply,
};
use products_sdk::{NewProduct, ProductService};
use service_kernel::DomainError;
use tonic::{Request, Response, Status};
use transport_grpc::status::domain_status;
use uuid::Uuid;

use crate::domain::Service;

#[derive(Clone)]
pub struct ProductServiceImpl {
    service: Arc<Service>,
}

impl ProductServiceImpl {
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

fn parse_id(raw: &str, field: &'static str) -> Result<Uuid, Status> {
    Uuid::parse_str(raw)
        .map_err(|_| domain_status(&DomainError::validation(field, "must be a UUID")))
}

#[async_trait]
impl ProductService for ProductServiceImpl {
    async fn create_product(
        &self,
        request: Request<CreateProductRequest>,
    ) -> Result<Response<ProductReply>, Status> {
        let req = request.into_inner();

        let product = self
            .service
            .create_product(NewProduct {
                name: req.name,
                price_cents: req.price_cents,
            })
            .await
            .map_err(|e| domain_status(&e))?;

        Ok(Response::new(ProductReply {
            product: Some(product.into()),
        }))
    }

    async fn get_product(
        &self,
        request: Request<GetProductRequest>,
    ) -> Result<Response<ProductReply>, Status> {
        let id = parse_id(&request.into_inner().product_id, "product_id")?;

        let product = self
            .service
            .get_product(id)
            .await
            .map_err(|e| domain_status(&e))?;

        Ok(Response::new(ProductReply {
            product: Some(product.into()),
        }))
    }

    async fn delete_product(
        &self,
        request: Request<DeleteProductRequest>,
    ) -> Result<Response<DeleteProductReply>, Status> {
        let id = parse_id(&request.into_inner().product_id, "product_id")?;

        self.service
            .delete_product(id)
            .await
            .map_err(|e| domain_status(&e))?;

        Ok(Response::new(DeleteProductReply {}))
    }
}
