//! Display projections over snapshots.
//!
//! Pure functions that turn entities into the text lines a back office
//! screen shows. They never touch the network.

use std::fmt::Write;

use crate::rest::resources::{CartItem, Customer, InventoryItem, Order, Product};

/// Shown in place of an empty cart.
pub const EMPTY_CART: &str = "Your cart is empty.";

/// Shown in place of an empty order list.
pub const EMPTY_ORDERS: &str = "No orders found.";

/// Formats an amount with a dollar sign and two decimals.
///
/// ```rust
/// use backoffice_client::view::format_price;
///
/// assert_eq!(format_price(9.5), "$9.50");
/// assert_eq!(format_price(1234.0), "$1234.00");
/// ```
#[must_use]
pub fn format_price(amount: f64) -> String {
    format!("${amount:.2}")
}

#[must_use]
pub fn product_line(product: &Product) -> String {
    match product.description.as_deref() {
        Some(description) if !description.is_empty() => format!(
            "{} - {} ({description})",
            product.name,
            format_price(product.price)
        ),
        _ => format!("{} - {}", product.name, format_price(product.price)),
    }
}

#[must_use]
pub fn inventory_line(item: &InventoryItem) -> String {
    let stock = item
        .stock_level
        .map_or_else(|| "N/A".to_string(), |level| level.to_string());
    format!(
        "{} - {} - Stock: {stock}",
        item.name,
        format_price(item.price)
    )
}

#[must_use]
pub fn customer_line(customer: &Customer) -> String {
    format!("{} ({})", customer.name, customer.email)
}

#[must_use]
pub fn cart_line(item: &CartItem) -> String {
    format!(
        "{} - {} x {} = {}",
        item.name,
        format_price(item.price),
        item.quantity,
        format_price(item.line_total())
    )
}

/// Sum of every line in a cart.
#[must_use]
pub fn cart_total(items: &[CartItem]) -> f64 {
    items.iter().map(CartItem::line_total).sum()
}

/// The lines of a cart, or [`EMPTY_CART`].
#[must_use]
pub fn cart_lines(items: &[CartItem]) -> Vec<String> {
    if items.is_empty() {
        return vec![EMPTY_CART.to_string()];
    }
    items.iter().map(cart_line).collect()
}

/// Header line of an order, followed by one indented line per item.
#[must_use]
pub fn order_lines(order: &Order) -> Vec<String> {
    // Writing into a String cannot fail.
    let mut header = format!("Order #{}", order.order_id);
    if let Some(name) = &order.customer_name {
        let _ = write!(header, " - {name}");
    }
    let _ = write!(
        header,
        " - {} - {}",
        format_price(order.total_amount),
        order.status
    );
    if let Some(created_at) = order.created_at {
        let _ = write!(header, " - {}", created_at.format("%Y-%m-%d %H:%M"));
    }

    let mut lines = vec![header];
    lines.extend(order.items.iter().map(|item| {
        format!(
            "  {} x {} @ {}",
            item.product_name,
            item.quantity,
            format_price(item.price)
        )
    }));
    lines
}

/// Every order's lines, or [`EMPTY_ORDERS`].
#[must_use]
pub fn orders_lines(orders: &[Order]) -> Vec<String> {
    if orders.is_empty() {
        return vec![EMPTY_ORDERS.to_string()];
    }
    orders.iter().flat_map(order_lines).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::resources::{OrderItem, OrderStatus};
    use chrono::{TimeZone, Utc};

    fn order() -> Order {
        Order {
            order_id: 17,
            customer_id: Some(4),
            customer_name: Some("Ada".to_string()),
            total_amount: 12.5,
            status: OrderStatus::Pending,
            created_at: Some(Utc.with_ymd_and_hms(2026, 10, 19, 10, 0, 0).unwrap()),
            items: vec![OrderItem {
                product_id: 1,
                product_name: "Mug".to_string(),
                price: 3.5,
                quantity: 2,
            }],
        }
    }

    #[test]
    fn test_format_price_rounds_to_two_places() {
        assert_eq!(format_price(0.0), "$0.00");
        assert_eq!(format_price(9.999), "$10.00");
        assert_eq!(format_price(24.5), "$24.50");
    }

    #[test]
    fn test_product_line_with_and_without_description() {
        let mut product = Product {
            id: 1,
            name: "Mug".to_string(),
            price: 3.0,
            description: Some("Ceramic".to_string()),
        };
        assert_eq!(product_line(&product), "Mug - $3.00 (Ceramic)");
        product.description = None;
        assert_eq!(product_line(&product), "Mug - $3.00");
    }

    #[test]
    fn test_inventory_line_with_missing_stock() {
        let item = InventoryItem {
            product_id: 2,
            name: "Lamp".to_string(),
            price: 24.5,
            stock_level: None,
        };
        assert_eq!(inventory_line(&item), "Lamp - $24.50 - Stock: N/A");
    }

    #[test]
    fn test_cart_lines_and_total() {
        assert_eq!(cart_lines(&[]), vec![EMPTY_CART.to_string()]);

        let items = vec![
            CartItem {
                cart_id: Some(1),
                product_id: 11,
                name: "Mug".to_string(),
                price: 3.5,
                quantity: 2,
            },
            CartItem {
                cart_id: Some(2),
                product_id: 12,
                name: "Tea".to_string(),
                price: 5.0,
                quantity: 1,
            },
        ];
        assert_eq!(cart_lines(&items)[0], "Mug - $3.50 x 2 = $7.00");
        assert!((cart_total(&items) - 12.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_order_lines() {
        let lines = order_lines(&order());
        assert_eq!(
            lines[0],
            "Order #17 - Ada - $12.50 - Pending - 2026-10-19 10:00"
        );
        assert_eq!(lines[1], "  Mug x 2 @ $3.50");
    }

    #[test]
    fn test_order_lines_without_name_or_date() {
        let mut order = order();
        order.customer_name = None;
        order.created_at = None;
        assert_eq!(order_lines(&order)[0], "Order #17 - $12.50 - Pending");
    }

    #[test]
    fn test_orders_lines_empty() {
        assert_eq!(orders_lines(&[]), vec![EMPTY_ORDERS.to_string()]);
        assert_eq!(orders_lines(&[order()]).len(), 2);
    }

    #[test]
    fn test_customer_line() {
        let customer = Customer {
            id: 5,
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            address: None,
        };
        assert_eq!(customer_line(&customer), "Ada (ada@example.com)");
    }
}
