use std::sync::Arc;

use chrono::{TimeZone, Utc};
use service_kernel::{codes, CallError, ErrorInfo, ServiceResult};
use tokio_util::sync::CancellationToken;
use tonic::Request;
use transport_grpc::call::unary;
use transport_grpc::client::ClientConfig;
use transport_grpc::status::decode_failure;
use uuid::Uuid;

use crate::api::ProductService;
use crate::model::{NewProduct, Product};
use crate::proto;

/// Client for the Products bounded context.
#[derive(Clone)]
pub struct ProductsClient {
    inner: Arc<dyn ProductService>,
    config: Arc<ClientConfig>,
}

impl ProductsClient {
    pub fn new(inner: Arc<dyn ProductService>) -> Self {
        Self::with_config(inner, ClientConfig::new("products"))
    }

    pub fn with_config(inner: Arc<dyn ProductService>, config: ClientConfig) -> Self {
        Self {
            inner,
            config: Arc::new(config),
        }
    }

    pub async fn create_product(
        &self,
        cancel: &CancellationToken,
        new_product: NewProduct,
    ) -> ServiceResult<Product> {
        let request = Request::new(proto::CreateProductRequest {
            name: new_product.name,
            price_cents: new_product.price_cents,
        });

        let response = unary(
            cancel,
            self.config.call_deadline,
            self.inner.create_product(request),
        )
        .await
        .map_err(|status| decode_failure(&status))?;

        decode_product(response.into_inner().product)
    }

    pub async fn get_product(
        &self,
        cancel: &CancellationToken,
        id: Uuid,
    ) -> ServiceResult<Product> {
        let request = Request::new(proto::GetProductRequest {
            product_id: id.to_string(),
        });

        let response = unary(
            cancel,
            self.config.call_deadline,
            self.inner.get_product(request),
        )
        .await
        .map_err(|status| decode_failure(&status))?;

        decode_product(response.into_inner().product)
    }

    pub async fn delete_product(&self, cancel: &CancellationToken, id: Uuid) -> ServiceResult<()> {
        let request = Request::new(proto::DeleteProductRequest {
            product_id: id.to_string(),
        });

        unary(
            cancel,
            self.config.call_deadline,
            self.inner.delete_product(request),
        )
        .await
        .map_err(|status| decode_failure(&status))?;

        Ok(())
    }
}

fn decode_product(msg: Option<proto::Product>) -> ServiceResult<Product> {
    let msg = msg.ok_or_else(|| malformed("missing product payload"))?;

    let id = Uuid::parse_str(&msg.id).map_err(|_| malformed("product id is not a UUID"))?;
    let created_at = Utc
        .timestamp_millis_opt(msg.created_at_unix_ms)
        .single()
        .ok_or_else(|| malformed("created_at out of range"))?;

    Ok(Product {
        id,
        name: msg.name,
        price_cents: msg.price_cents,
        created_at,
    })
}

fn malformed(detail: &str) -> CallError {
    tracing::warn!(detail, "malformed reply from products service");
    CallError::Infrastructure(ErrorInfo::new(
        codes::INTERNAL,
        format!("malformed response: {detail}"),
    ))
}
