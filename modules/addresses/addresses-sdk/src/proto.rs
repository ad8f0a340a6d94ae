//! Wire messages for `storefront.addresses.v1`.

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Address {
    #[prost(string, tag = "1")]
    pub id: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub user_id: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub street: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub city: ::prost::alloc::string::String,
    #[prost(string, tag = "5")]
    pub postal_code: ::prost::alloc::string::String,
    #[prost(int64, tag = "6")]
    pub created_at_unix_ms: i64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateAddressRequest {
    #[prost(string, tag = "1")]
    pub user_id: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub street: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub city: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub postal_code: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetAddressRequest {
    #[prost(string, tag = "1")]
    pub address_id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListAddressesRequest {
    #[prost(string, tag = "1")]
    pub user_id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteAddressRequest {
    #[prost(string, tag = "1")]
    pub address_id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AddressReply {
    #[prost(message, optional, tag = "1")]
    pub address: ::core::option::Option<Address>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListAddressesReply {
    #[prost(message, repeated, tag = "1")]
    pub addresses: ::prost::alloc::vec::Vec<Address>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteAddressReply {}
