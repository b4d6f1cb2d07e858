//! Order operations
//!
//! Order creation and history, plus the quick-order convenience that
//! turns a product straight into a minimal purchase.

use std::sync::Arc;

use shopfront_domain::{NewOrder, Order, Product};
use tracing::instrument;
use urlencoding::encode;

use super::client::ApiClient;
use super::errors::ApiError;

/// Orders API group
pub struct OrdersApi {
    client: Arc<ApiClient>,
}

impl OrdersApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Place an order
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails
    #[instrument(skip(self, order), fields(items = order.items.len()))]
    pub async fn create(&self, order: &NewOrder) -> Result<Order, ApiError> {
        self.client.post("/orders", order).await
    }

    /// List the signed-in user's orders
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails
    #[instrument(skip(self))]
    pub async fn get_my_orders(&self) -> Result<Vec<Order>, ApiError> {
        self.client.get("/orders/my-orders").await
    }

    /// Fetch a single order
    ///
    /// # Errors
    ///
    /// Returns error if the order is missing or the request fails
    #[instrument(skip(self), fields(order_id = %id))]
    pub async fn get_by_id(&self, id: &str) -> Result<Order, ApiError> {
        let path = format!("/orders/{}", encode(id));
        self.client.get(&path).await
    }

    /// Place a one-item order for a product, bypassing the shipping
    /// form (see [`NewOrder::quick`])
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub async fn create_quick_order(&self, product: &Product) -> Result<Order, ApiError> {
        self.create(&NewOrder::quick(product)).await
    }
}
