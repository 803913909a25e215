//! Order resource implementation.
//!
//! Orders are placed from the selected customer's cart (the server empties
//! the cart in the same transaction) and can be filtered by customer. When
//! filtered, the server leaves `customer_id` null on every row; the client
//! fills it in from the filter.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::rest::{
    Outcome, Payload, Receipt, Resource, ResourceOperation, ResourcePath, Snapshot,
};
use crate::session::SessionContext;
use crate::{HttpMethod, ResourceClient};

use super::common;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum OrderStatus {
    #[default]
    Pending,
    Complete,
}

impl OrderStatus {
    /// The other status.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Pending => Self::Complete,
            Self::Complete => Self::Pending,
        }
    }

    /// Label of the control that flips this status.
    #[must_use]
    pub const fn toggle_label(self) -> &'static str {
        match self {
            Self::Pending => "Mark as Complete",
            Self::Complete => "Revert to Pending",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Complete => "Complete",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderItem {
    pub product_id: u64,
    pub product_name: String,
    #[serde(deserialize_with = "common::decimal")]
    pub price: f64,
    pub quantity: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub order_id: u64,
    #[serde(default)]
    pub customer_id: Option<u64>,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(deserialize_with = "common::decimal")]
    pub total_amount: f64,
    pub status: OrderStatus,
    #[serde(default, deserialize_with = "common::optional_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub items: Vec<OrderItem>,
}

/// Query parameters for `GET /orders`.
#[derive(Debug, Clone, Copy, Serialize, Default, PartialEq, Eq)]
pub struct OrderListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<u64>,
}

impl OrderListParams {
    #[must_use]
    pub const fn for_customer(customer_id: u64) -> Self {
        Self {
            customer_id: Some(customer_id),
        }
    }
}

impl Resource for Order {
    type Id = u64;
    type ListParams = OrderListParams;

    const NAME: &'static str = "Order";
    const PLURAL: &'static str = "orders";
    const ID_KEY: &'static str = "order_id";
    const ASSIGNED_ID_KEY: Option<&'static str> = Some("order_id");
    const AFFECTS: &'static [&'static str] = &["cart"];
    const DELETE_PROMPT: &'static str =
        "Are you sure you want to delete this order? This action cannot be undone.";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(HttpMethod::Get, ResourceOperation::List, &[], "orders"),
        ResourcePath::new(HttpMethod::Post, ResourceOperation::Create, &[], "orders"),
        ResourcePath::new(
            HttpMethod::Put,
            ResourceOperation::Update,
            &["order_id"],
            "orders/{order_id}/status",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["order_id"],
            "orders/{order_id}",
        ),
    ];

    fn id(&self) -> u64 {
        self.order_id
    }

    fn normalize_collection(body: Value, params: &OrderListParams) -> Value {
        let Some(customer_id) = params.customer_id else {
            return body;
        };
        let rows = match body {
            Value::Array(rows) => rows,
            other => return other,
        };

        let rows = rows
            .into_iter()
            .filter_map(|mut row| {
                let owner = row.get("customer_id").and_then(Value::as_u64);
                match owner {
                    Some(id) if id != customer_id => None,
                    Some(_) => Some(row),
                    None => {
                        if let Value::Object(map) = &mut row {
                            map.insert("customer_id".to_string(), Value::from(customer_id));
                        }
                        Some(row)
                    }
                }
            })
            .collect();
        Value::Array(rows)
    }
}

/// Body of `POST /orders`. The order is built from the customer's cart.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct NewOrder {
    pub customer_id: u64,
}

impl Payload<Order> for NewOrder {}

/// Body of `PUT /orders/{order_id}/status`.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct StatusUpdate {
    pub status: OrderStatus,
}

impl Payload<Order> for StatusUpdate {}

impl ResourceClient {
    /// Places an order for the selected customer from their cart.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Validation`](crate::rest::ResourceError::Validation)
    /// without a network call when no customer is selected. An empty cart is
    /// rejected by the server.
    pub async fn place_order(&self, session: &SessionContext) -> Outcome<Receipt> {
        let customer_id = session.require_customer::<Order>()?;
        self.create::<Order, _>(&NewOrder { customer_id }).await
    }

    /// Lists the selected customer's orders, or every order when no customer
    /// is selected.
    ///
    /// # Errors
    ///
    /// Same as [`list`](Self::list).
    pub async fn orders_for(&self, session: &SessionContext) -> Outcome<Snapshot<Order>> {
        let params = session
            .selected_customer()
            .map(OrderListParams::for_customer);
        self.list::<Order>(params).await
    }

    /// Sets an order's status.
    ///
    /// # Errors
    ///
    /// Same as [`update`](Self::update).
    pub async fn set_order_status(&self, order_id: u64, status: OrderStatus) -> Outcome<Receipt> {
        self.update::<Order, _>(&order_id, &StatusUpdate { status })
            .await
    }

    /// Flips an order between `Pending` and `Complete`.
    ///
    /// # Errors
    ///
    /// Same as [`update`](Self::update).
    pub async fn toggle_order_status(&self, order: &Order) -> Outcome<Receipt> {
        self.set_order_status(order.order_id, order.status.toggled())
            .await
    }
}
