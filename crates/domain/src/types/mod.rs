//! Wire-format types exchanged with the storefront API

pub mod order;
pub mod product;
pub mod user;

pub use order::{NewOrder, Order, OrderItem, PaymentMethod, ShippingAddress};
pub use product::{NewProduct, Product};
pub use user::{AuthSession, Credentials, ProfileUpdate, RegisterUser, UserProfile};
