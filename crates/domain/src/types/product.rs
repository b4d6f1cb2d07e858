//! Catalog product types

use serde::{Deserialize, Serialize};

/// A catalog product as returned by the storefront API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub price: f64,
    pub description: String,
    pub category: String,
    /// Image URL rendered by the storefront
    pub image: String,
    pub stock: u32,
}

/// Payload for creating a new product (the server assigns the id)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub description: String,
    pub category: String,
    pub image: String,
    pub stock: u32,
}
