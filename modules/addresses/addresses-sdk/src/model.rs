use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A postal address owned by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub id: Uuid,
    pub user_id: Uuid,
    pub street: String,
    pub city: String,
    pub postal_code: String,
    pub created_at: DateTime<Utc>,
}

/// Payload for creating an address.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAddress {
    pub user_id: Uuid,
    pub street: String,
    pub city: String,
    pub postal_code: String,
}

impl From<Address> for crate::proto::Address {
    fn from(address: Address) -> Self {
        Self {
            id: address.id.to_string(),
            user_id: address.user_id.to_string(),
            street: address.street,
            city: address.city,
            postal_code: address.postal_code,
            created_at_unix_ms: address.created_at.timestamp_millis(),
        }
    }
}
