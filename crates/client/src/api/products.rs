//! Product catalog operations
//!
//! Thin mapping from catalog verbs to facade calls; no validation,
//! pagination, or caching here.

use std::sync::Arc;

use serde_json::Value;
use shopfront_domain::{NewProduct, Product};
use tracing::instrument;
use urlencoding::encode;

use super::client::ApiClient;
use super::errors::ApiError;

/// Products API group
pub struct ProductsApi {
    client: Arc<ApiClient>,
}

impl ProductsApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// List the whole catalog
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails
    #[instrument(skip(self))]
    pub async fn get_all(&self) -> Result<Vec<Product>, ApiError> {
        self.client.get("/products").await
    }

    /// Fetch a single product
    ///
    /// # Errors
    ///
    /// Returns error if the product is missing or the request fails
    #[instrument(skip(self), fields(product_id = %id))]
    pub async fn get_by_id(&self, id: &str) -> Result<Product, ApiError> {
        let path = format!("/products/{}", encode(id));
        self.client.get(&path).await
    }

    /// List products in a category
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails
    #[instrument(skip(self))]
    pub async fn get_by_category(&self, category: &str) -> Result<Vec<Product>, ApiError> {
        let path = format!("/products/category/{}", encode(category));
        self.client.get(&path).await
    }

    /// Create a new product
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails
    #[instrument(skip(self, product), fields(name = %product.name))]
    pub async fn create(&self, product: &NewProduct) -> Result<Product, ApiError> {
        self.client.post("/products", product).await
    }

    /// Delete a product; returns the server's acknowledgement envelope
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails
    #[instrument(skip(self), fields(product_id = %id))]
    pub async fn delete(&self, id: &str) -> Result<Value, ApiError> {
        let path = format!("/products/{}", encode(id));
        self.client.delete(&path).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::config::ApiClientConfig;

    fn products_for(server: &MockServer) -> ProductsApi {
        let client = ApiClient::builder()
            .config(ApiClientConfig::with_base_url(server.uri()))
            .build()
            .unwrap();
        ProductsApi::new(Arc::new(client))
    }

    fn vase_json() -> Value {
        json!({
            "_id": "p1",
            "name": "Vase",
            "price": 1299.0,
            "description": "Hand-painted ceramic vase",
            "category": "decor",
            "image": "https://cdn.example.com/vase.jpg",
            "stock": 7
        })
    }

    #[tokio::test]
    async fn get_all_hits_the_products_endpoint() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/products"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([vase_json()])))
            .expect(1)
            .mount(&server)
            .await;

        let products = products_for(&server).get_all().await.unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, "p1");
    }

    #[tokio::test]
    async fn get_by_category_encodes_the_segment() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/products/category/home%20decor"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let products = products_for(&server).get_by_category("home decor").await.unwrap();
        assert!(products.is_empty());
    }

    #[tokio::test]
    async fn delete_uses_the_id_path() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/products/p1"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"message": "Product deleted"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let envelope = products_for(&server).delete("p1").await.unwrap();
        assert_eq!(envelope["message"], "Product deleted");
    }

    #[tokio::test]
    async fn create_posts_the_payload() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/products"))
            .respond_with(ResponseTemplate::new(201).set_body_json(vase_json()))
            .expect(1)
            .mount(&server)
            .await;

        let new_product = NewProduct {
            name: "Vase".to_string(),
            price: 1299.0,
            description: "Hand-painted ceramic vase".to_string(),
            category: "decor".to_string(),
            image: "https://cdn.example.com/vase.jpg".to_string(),
            stock: 7,
        };
        let created = products_for(&server).create(&new_product).await.unwrap();
        assert_eq!(created.id, "p1");

        let requests = server.received_requests().await.unwrap();
        let body: Value = serde_json::from_slice(&requests[0].body).unwrap();
        assert_eq!(body["name"], "Vase");
        assert_eq!(body["stock"], 7);
    }
}
