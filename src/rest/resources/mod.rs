//! Back office REST resources.
//!
//! | Type | Collection | Operations |
//! |------|------------|------------|
//! | [`Product`] | `products` | list, create ([`NewProduct`]), delete |
//! | [`InventoryItem`] | `inventory` | list, update ([`StockUpdate`]) |
//! | [`Customer`] | `customers` | list, create, update ([`CustomerDetails`]), delete |
//! | [`CartItem`] | `cart/{customer_id}` | list, create ([`NewCartItem`]), delete |
//! | [`Order`] | `orders` | list ([`OrderListParams`]), create ([`NewOrder`]), update ([`StatusUpdate`]), delete |
//!
//! ```rust,ignore
//! use backoffice_client::rest::resources::{Order, OrderListParams};
//!
//! let orders = client.list::<Order>(Some(OrderListParams::for_customer(42))).await?;
//! assert!(orders.iter().all(|o| o.customer_id == Some(42)));
//! ```

mod cart;
mod common;
mod customer;
mod inventory;
mod order;
mod product;

pub use cart::{CartItem, NewCartItem, CART_OWNER};
pub use customer::{Customer, CustomerDetails};
pub use inventory::{InventoryItem, StockUpdate};
pub use order::{NewOrder, Order, OrderItem, OrderListParams, OrderStatus, StatusUpdate};
pub use product::{NewProduct, Product};
