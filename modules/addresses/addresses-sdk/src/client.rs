use std::sync::Arc;

use chrono::{TimeZone, Utc};
use service_kernel::{codes, CallError, ErrorInfo, ServiceResult};
use tokio_util::sync::CancellationToken;
use tonic::Request;
use transport_grpc::call::unary;
use transport_grpc::client::ClientConfig;
use transport_grpc::status::decode_failure;
use uuid::Uuid;

use crate::api::AddressService;
use crate::model::{Address, NewAddress};
use crate::proto;

/// Client for the Addresses bounded context.
#[derive(Clone)]
pub struct AddressesClient {
    inner: Arc<dyn AddressService>,
    config: Arc<ClientConfig>,
}

impl AddressesClient {
    pub fn new(inner: Arc<dyn AddressService>) -> Self {
        Self::with_config(inner, ClientConfig::new("addresses"))
    }

    pub fn with_config(inner: Arc<dyn AddressService>, config: ClientConfig) -> Self {
        Self {
            inner,
            config: Arc::new(config),
        }
    }

    pub async fn create_address(
        &self,
        cancel: &CancellationToken,
        new_address: NewAddress,
    ) -> ServiceResult<Address> {
        let request = Request::new(proto::CreateAddressRequest {
            user_id: new_address.user_id.to_string(),
            street: new_address.street,
            city: new_address.city,
            postal_code: new_address.postal_code,
        });

        let response = unary(
            cancel,
            self.config.call_deadline,
            self.inner.create_address(request),
        )
        .await
        .map_err(|status| decode_failure(&status))?;

        decode_address(response.into_inner().address)
    }

    pub async fn get_address(
        &self,
        cancel: &CancellationToken,
        id: Uuid,
    ) -> ServiceResult<Address> {
        let request = Request::new(proto::GetAddressRequest {
            address_id: id.to_string(),
        });

        let response = unary(
            cancel,
            self.config.call_deadline,
            self.inner.get_address(request),
        )
        .await
        .map_err(|status| decode_failure(&status))?;

        decode_address(response.into_inner().address)
    }

    pub async fn list_addresses(
        &self,
        cancel: &CancellationToken,
        user_id: Uuid,
    ) -> ServiceResult<Vec<Address>> {
        let request = Request::new(proto::ListAddressesRequest {
            user_id: user_id.to_string(),
        });

        let response = unary(
            cancel,
            self.config.call_deadline,
            self.inner.list_addresses(request),
        )
        .await
        .map_err(|status| decode_failure(&status))?;

        response
            .into_inner()
            .addresses
            .into_iter()
            .map(|msg| decode_address(Some(msg)))
            .collect()
    }

    pub async fn delete_address(&self, cancel: &CancellationToken, id: Uuid) -> ServiceResult<()> {
        let request = Request::new(proto::DeleteAddressRequest {
            address_id: id.to_string(),
        });

        unary(
            cancel,
            self.config.call_deadline,
            self.inner.delete_address(request),
        )
        .await
        .map_err(|status| decode_failure(&status))?;

        Ok(())
    }
}

fn decode_address(msg: Option<proto::Address>) -> ServiceResult<Address> {
    let msg = msg.ok_or_else(|| malformed("missing address payload"))?;

    let id = Uuid::parse_str(&msg.id).map_err(|_| malformed("address id is not a UUID"))?;
    let user_id = Uuid::parse_str(&msg.user_id).map_err(|_| malformed("user id is not a UUID"))?;
    let created_at = Utc
        .timestamp_millis_opt(msg.created_at_unix_ms)
        .single()
        .ok_or_else(|| malformed("created_at out of range"))?;

    Ok(Address {
        id,
        user_id,
        street: msg.street,
        city: msg.city,
        postal_code: msg.postal_code,
        created_at,
    })
}

fn malformed(detail: &str) -> CallError {
    tracing::warn!(detail, "malformed reply from addresses service");
    CallError::Infrastructure(ErrorInfo::new(
        codes::INTERNAL,
        format!("malformed response: {detail}"),
    ))
}
