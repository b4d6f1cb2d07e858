//! Storefront API client
//!
//! This module provides the HTTP client facade and the domain API
//! groups built on top of it.
//!
//! # Architecture
//!
//! - All calls route through [`ApiClient`] (no direct reqwest use in
//!   the groups)
//! - Bearer auth via an injected [`AccessTokenProvider`]; anonymous
//!   requests are valid
//! - At most one [`NotificationEvent`] per call, delivered to an
//!   injected [`NotificationReporter`]
//! - One network call per operation, zero retries

use std::sync::Arc;

pub mod auth;
pub mod client;
pub mod errors;
pub mod notify;
pub mod orders;
pub mod products;
pub mod users;

pub use auth::{AccessTokenProvider, AnonymousProvider, SessionStore, StaticTokenProvider};
pub use client::{ApiClient, ApiClientBuilder, RequestOptions};
pub use errors::{
    ApiError, GENERIC_ERROR_MESSAGE, MALFORMED_RESPONSE_MESSAGE, NETWORK_ERROR_MESSAGE,
};
pub use notify::{
    NotificationEvent, NotificationKind, NotificationReporter, NullReporter, TracingReporter,
};
pub use orders::OrdersApi;
pub use products::ProductsApi;
pub use users::UsersApi;

/// All domain API groups bundled over one shared facade
pub struct Shopfront {
    pub products: ProductsApi,
    pub users: UsersApi,
    pub orders: OrdersApi,
}

impl Shopfront {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            products: ProductsApi::new(client.clone()),
            users: UsersApi::new(client.clone()),
            orders: OrdersApi::new(client),
        }
    }
}
