//! Typed client for the Users service.
//!
//! Expected domain failures never surface as errors of the transport: every
//! failed call is decoded into a `CallError` before it reaches the caller.

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use service_kernel::{codes, CallError, ErrorInfo, ServiceResult};
use tokio_util::sync::CancellationToken;
use tonic::Request;
use transport_grpc::call::unary;
use transport_grpc::client::ClientConfig;
use transport_grpc::status::decode_failure;
use uuid::Uuid;

use crate::api::UserService;
use crate::model::{NewUser, User};
use crate::proto;

/// Client for the Users bounded context.
#[derive(Clone)]
pub struct UsersClient {
    inner: Arc<dyn UserService>,
    config: Arc<ClientConfig>,
}

impl UsersClient {
    pub fn new(inner: Arc<dyn UserService>) -> Self {
        Self::with_config(inner, ClientConfig::new("users"))
    }

    pub fn with_config(inner: Arc<dyn UserService>, config: ClientConfig) -> Self {
        Self {
            inner,
            config: Arc::new(config),
        }
    }

    pub async fn create_user(
        &self,
        cancel: &CancellationToken,
        new_user: NewUser,
    ) -> ServiceResult<User> {
        let request = Request::new(proto::CreateUserRequest {
            email: new_user.email,
            display_name: new_user.display_name,
        });

        let response = unary(
            cancel,
            self.config.call_deadline,
            self.inner.create_user(request),
        )
        .await
        .map_err(|status| decode_failure(&status))?;

        decode_user(response.into_inner().user)
    }

    pub async fn get_user(&self, cancel: &CancellationToken, id: Uuid) -> ServiceResult<User> {
        let request = Request::new(proto::GetUserRequest {
            user_id: id.to_string(),
        });

        let response = unary(
            cancel,
            self.config.call_deadline,
            self.inner.get_user(request),
        )
        .await
        .map_err(|status| decode_failure(&status))?;

        decode_user(response.into_inner().user)
    }

    pub async fn delete_user(&self, cancel: &CancellationToken, id: Uuid) -> ServiceResult<()> {
        let request = Request::new(proto::DeleteUserRequest {
            user_id: id.to_string(),
        });

        unary(
            cancel,
            self.config.call_deadline,
            self.inner.delete_user(request),
        )
        .await
        .map_err(|status| decode_failure(&status))?;

        Ok(())
    }
}

fn decode_user(msg: Option<proto::User>) -> ServiceResult<User> {
    let msg = msg.ok_or_else(|| malformed("missing user payload"))?;

    let id = Uuid::parse_str(&msg.id).map_err(|_| malformed("user id is not a UUID"))?;
    let created_at = Utc
        .timestamp_millis_opt(msg.created_at_unix_ms)
        .single()
        .ok_or_else(|| malformed("created_at out of range"))?;

    Ok(User {
        id,
        email: msg.email,
        display_name: msg.display_name,
        created_at,
    })
}

fn malformed(detail: &str) -> CallError {
    tracing::warn!(detail, "malformed reply from users service");
    CallError::Infrastructure(ErrorInfo::new(
        codes::INTERNAL,
        format!("malformed response: {detail}"),
    ))
}
