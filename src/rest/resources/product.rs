//! Product resource implementation.
//!
//! Products are created and deleted; they are never edited in place.
//! Creating a product also creates its inventory row, and deleting one
//! removes its inventory and cart rows, so both collections are refreshed
//! after a product mutation.

use serde::{Deserialize, Serialize};

use crate::rest::resource::{require_non_negative, require_text};
use crate::rest::{Payload, ResourceError, ResourceOperation, ResourcePath, Resource};
use crate::HttpMethod;

use super::common;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: u64,
    pub name: String,
    #[serde(deserialize_with = "common::decimal")]
    pub price: f64,
    #[serde(default)]
    pub description: Option<String>,
}

impl Resource for Product {
    type Id = u64;
    type ListParams = ();

    const NAME: &'static str = "Product";
    const PLURAL: &'static str = "products";
    const ASSIGNED_ID_KEY: Option<&'static str> = Some("product_id");
    const AFFECTS: &'static [&'static str] = &["inventory", "cart"];
    const DELETE_PROMPT: &'static str = "Are you sure you want to delete this product?";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(HttpMethod::Get, ResourceOperation::List, &[], "products"),
        ResourcePath::new(HttpMethod::Post, ResourceOperation::Create, &[], "products"),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["id"],
            "products/{id}",
        ),
    ];

    fn id(&self) -> u64 {
        self.id
    }
}

/// Body of `POST /products`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub description: String,
}

impl NewProduct {
    #[must_use]
    pub fn new(name: impl Into<String>, price: f64, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price,
            description: description.into(),
        }
    }
}

impl Payload<Product> for NewProduct {
    fn validate(&self) -> Result<(), ResourceError> {
        require_text::<Product>("name", &self.name)?;
        require_text::<Product>("description", &self.description)?;
        require_non_negative::<Product>("price", self.price)
    }
}
