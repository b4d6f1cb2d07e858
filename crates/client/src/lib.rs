//! # Shopfront Client
//!
//! Client SDK for the Shopfront storefront API: a single HTTP facade
//! that centralizes request construction, bearer-token attachment,
//! JSON parsing, error normalization, and user-facing notifications,
//! plus thin domain API groups for products, users, and orders.
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use shopfront_client::api::{ApiClient, SessionStore, Shopfront};
//! use shopfront_client::config::ApiClientConfig;
//! use shopfront_domain::Credentials;
//!
//! # async fn run() -> Result<(), shopfront_client::api::ApiError> {
//! let session = Arc::new(SessionStore::new());
//! let client = ApiClient::builder()
//!     .config(ApiClientConfig::from_env()?)
//!     .auth(session.clone())
//!     .build()?;
//! let shop = Shopfront::new(Arc::new(client));
//!
//! let login = shop
//!     .users
//!     .login(&Credentials {
//!         email: "ada@example.com".into(),
//!         password: "hunter2".into(),
//!     })
//!     .await?;
//! session.store(login);
//!
//! let products = shop.products.get_all().await.unwrap_or_default();
//! # let _ = products;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod http;

pub use api::{ApiClient, ApiError, Shopfront};
pub use config::ApiClientConfig;
