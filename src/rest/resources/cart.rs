//! Cart resource implementation.
//!
//! A cart belongs to one customer and is addressed through the customer's id
//! (`cart/{customer_id}`). Adding an item deducts stock server-side, so the
//! inventory collection is refreshed after every cart mutation.
//!
//! When the cart is empty the server answers `{"message": "Cart is empty"}`
//! instead of `[]`; [`CartItem::normalize_collection`] turns that into an
//! empty list.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::rest::{
    Consent, Outcome, Payload, Receipt, Resource, ResourceError, ResourceOperation, ResourcePath,
    Snapshot,
};
use crate::session::SessionContext;
use crate::{HttpMethod, ResourceClient};

use super::common;

/// Path parameter naming the cart's owner.
pub const CART_OWNER: &str = "customer_id";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    #[serde(default)]
    pub cart_id: Option<u64>,
    pub product_id: u64,
    pub name: String,
    #[serde(deserialize_with = "common::decimal")]
    pub price: f64,
    pub quantity: u32,
}

impl CartItem {
    /// Price times quantity.
    #[must_use]
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

impl Resource for CartItem {
    type Id = u64;
    type ListParams = ();

    const NAME: &'static str = "CartItem";
    const PLURAL: &'static str = "cart";
    const ID_KEY: &'static str = "product_id";
    const AFFECTS: &'static [&'static str] = &["inventory"];
    const DELETE_PROMPT: &'static str =
        "Are you sure you want to delete this item from the cart?";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::List,
            &["customer_id"],
            "cart/{customer_id}",
        ),
        ResourcePath::new(HttpMethod::Post, ResourceOperation::Create, &[], "cart"),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["customer_id", "product_id"],
            "cart/{customer_id}/{product_id}",
        ),
    ];

    fn id(&self) -> u64 {
        self.product_id
    }

    fn normalize_collection(body: Value, _params: &()) -> Value {
        match body {
            Value::Object(map) if map.contains_key("message") => {
                tracing::debug!("Cart sentinel received: {:?}", map.get("message"));
                Value::Array(Vec::new())
            }
            Value::Null => Value::Array(Vec::new()),
            other => other,
        }
    }
}

/// Body of `POST /cart`.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct NewCartItem {
    pub customer_id: u64,
    pub product_id: u64,
    pub quantity: i64,
}

impl Payload<CartItem> for NewCartItem {
    fn validate(&self) -> Result<(), ResourceError> {
        if self.quantity <= 0 {
            return Err(ResourceError::validation(
                CartItem::NAME,
                "quantity",
                format!("must be positive, got {}", self.quantity),
            ));
        }
        Ok(())
    }
}

impl ResourceClient {
    /// Lists the selected customer's cart.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Validation`] without a network call when no
    /// customer is selected.
    pub async fn cart_for(&self, session: &SessionContext) -> Outcome<Snapshot<CartItem>> {
        let customer_id = session.require_customer::<CartItem>()?;
        self.list_in::<CartItem>(CART_OWNER, customer_id, None)
            .await
    }

    /// Adds `quantity` of a product to the selected customer's cart.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Validation`] without a network call when no
    /// customer is selected or `quantity` is not positive.
    pub async fn add_to_cart(
        &self,
        session: &SessionContext,
        product_id: u64,
        quantity: i64,
    ) -> Outcome<Receipt> {
        let customer_id = session.require_customer::<CartItem>()?;
        let item = NewCartItem {
            customer_id,
            product_id,
            quantity,
        };
        self.create::<CartItem, _>(&item).await
    }

    /// Removes one product from the selected customer's cart.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Validation`] without a network call when no
    /// customer is selected.
    pub async fn remove_from_cart(
        &self,
        session: &SessionContext,
        product_id: u64,
        consent: Consent<CartItem>,
    ) -> Outcome<()> {
        let customer_id = session.require_customer::<CartItem>()?;
        self.remove_in::<CartItem>(CART_OWNER, customer_id, &product_id, consent)
            .await
    }
}
