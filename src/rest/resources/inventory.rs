//! Inventory resource implementation.
//!
//! One row per product, keyed by `product_id`. The only mutation is setting
//! the stock level.

use serde::{Deserialize, Serialize};

use crate::rest::{
    Outcome, Payload, Receipt, Resource, ResourceError, ResourceOperation, ResourcePath,
};
use crate::{HttpMethod, ResourceClient};

use super::common;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InventoryItem {
    pub product_id: u64,
    pub name: String,
    #[serde(deserialize_with = "common::decimal")]
    pub price: f64,
    /// `None` when the product has no inventory row yet.
    #[serde(default)]
    pub stock_level: Option<i64>,
}

impl Resource for InventoryItem {
    type Id = u64;
    type ListParams = ();

    const NAME: &'static str = "InventoryItem";
    const PLURAL: &'static str = "inventory";
    const ID_KEY: &'static str = "product_id";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(HttpMethod::Get, ResourceOperation::List, &[], "inventory"),
        ResourcePath::new(
            HttpMethod::Put,
            ResourceOperation::Update,
            &["product_id"],
            "inventory/{product_id}",
        ),
    ];

    fn id(&self) -> u64 {
        self.product_id
    }
}

/// Body of `PUT /inventory/{product_id}`.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct StockUpdate {
    pub stock_level: i64,
}

impl Payload<InventoryItem> for StockUpdate {
    fn validate(&self) -> Result<(), ResourceError> {
        if self.stock_level < 0 {
            return Err(ResourceError::validation(
                InventoryItem::NAME,
                "stock_level",
                format!("must not be negative, got {}", self.stock_level),
            ));
        }
        Ok(())
    }
}

impl ResourceClient {
    /// Sets the stock level of one product.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Validation`] without a network call for a
    /// negative level.
    pub async fn set_stock(&self, product_id: u64, stock_level: i64) -> Outcome<Receipt> {
        self.update::<InventoryItem, _>(&product_id, &StockUpdate { stock_level })
            .await
    }
}
