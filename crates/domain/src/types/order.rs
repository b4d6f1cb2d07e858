//! Order types
//!
//! Orders reference products by id; the server resolves prices and
//! totals at creation time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::product::Product;

/// A single order line
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: String,
    pub quantity: u32,
}

/// Delivery address for an order
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
    pub name: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

impl ShippingAddress {
    /// Placeholder address used by quick orders, which bypass the
    /// shipping-details form.
    pub fn placeholder() -> Self {
        Self {
            name: "Customer".to_string(),
            street: "123 Main St".to_string(),
            city: "City".to_string(),
            state: "State".to_string(),
            zip_code: "12345".to_string(),
            country: "Country".to_string(),
        }
    }
}

/// Payment method accepted by the storefront
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    CashOnDelivery,
}

/// Payload for creating a new order
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    pub items: Vec<OrderItem>,
    pub shipping_address: ShippingAddress,
    pub payment_method: PaymentMethod,
}

impl NewOrder {
    /// Synthesize a minimal one-item order directly from a product.
    ///
    /// Quantity is fixed at 1 and the shipping address is the
    /// placeholder; payment is cash on delivery. Pure data shaping,
    /// no side effects.
    pub fn quick(product: &Product) -> Self {
        Self {
            items: vec![OrderItem { product_id: product.id.clone(), quantity: 1 }],
            shipping_address: ShippingAddress::placeholder(),
            payment_method: PaymentMethod::CashOnDelivery,
        }
    }
}

/// An order as returned by the storefront API
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: String,
    pub items: Vec<OrderItem>,
    pub shipping_address: ShippingAddress,
    pub payment_method: PaymentMethod,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub total_amount: Option<f64>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vase() -> Product {
        Product {
            id: "p1".to_string(),
            name: "Vase".to_string(),
            price: 1299.0,
            description: "Hand-painted ceramic vase".to_string(),
            category: "decor".to_string(),
            image: "https://cdn.example.com/vase.jpg".to_string(),
            stock: 7,
        }
    }

    #[test]
    fn quick_order_shapes_a_single_line_item() {
        let order = NewOrder::quick(&vase());

        assert_eq!(order.items.len(), 1);
        assert_eq!(order.items[0].product_id, "p1");
        assert_eq!(order.items[0].quantity, 1);
        assert_eq!(order.payment_method, PaymentMethod::CashOnDelivery);
    }

    #[test]
    fn quick_order_serializes_with_server_field_names() {
        let json = serde_json::to_value(NewOrder::quick(&vase())).unwrap();

        assert_eq!(json["items"][0]["productId"], "p1");
        assert_eq!(json["items"][0]["quantity"], 1);
        assert_eq!(json["paymentMethod"], "cash_on_delivery");
        assert_eq!(json["shippingAddress"]["zipCode"], "12345");
        assert_eq!(json["shippingAddress"]["street"], "123 Main St");
    }
}
