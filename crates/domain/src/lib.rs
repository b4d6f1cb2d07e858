//! # Shopfront Domain
//!
//! Business domain types for the Shopfront storefront API.
//!
//! This crate contains:
//! - Catalog types (Product)
//! - Account types (registration, credentials, profile, session)
//! - Order types (line items, shipping, payment)
//!
//! ## Architecture
//! - No dependencies on other Shopfront crates
//! - Pure wire-format models; the remote service owns all validation
//! - JSON field names follow the server's camelCase/`_id` conventions

pub mod types;

// Re-export commonly used items
pub use types::*;
