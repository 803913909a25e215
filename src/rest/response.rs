//! Success payloads for resource operations.
//!
//! - [`Snapshot<T>`]: the collection returned by `list`, stamped with its
//!   fetch time. It implements `Deref<Target = [T]>`, so it reads like a slice.
//! - [`Receipt`]: the acknowledgement returned by a mutating operation.
//!
//! A snapshot is never patched in place. After a successful mutation the
//! caller replaces it wholesale with the result of a fresh `list`.
//!
//! ```rust,ignore
//! let mut products = client.list::<Product>(None).await?;
//! client.remove::<Product>(&7, consent).await?;
//! products.replace_with(client.list::<Product>(None).await?);
//! for product in products.iter() {
//!     println!("{}", product.name);
//! }
//! ```

use std::ops::Deref;

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

/// The most recently retrieved ordered sequence of entities for a resource.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot<T> {
    items: Vec<T>,
    fetched_at: DateTime<Utc>,
}

impl<T> Snapshot<T> {
    /// Creates a snapshot fetched now.
    #[must_use]
    pub fn new(items: Vec<T>) -> Self {
        Self::fetched_at(items, Utc::now())
    }

    /// Creates a snapshot with an explicit fetch time.
    #[must_use]
    pub const fn fetched_at(items: Vec<T>, fetched_at: DateTime<Utc>) -> Self {
        Self { items, fetched_at }
    }

    /// When the collection was read from the server.
    #[must_use]
    pub const fn timestamp(&self) -> DateTime<Utc> {
        self.fetched_at
    }

    /// Replaces this snapshot with a newer one.
    ///
    /// Last writer wins: a snapshot older than the current one is ignored,
    /// so a slow refresh cannot overwrite a fresher render.
    pub fn replace_with(&mut self, newer: Self) {
        if newer.fetched_at >= self.fetched_at {
            *self = newer;
        } else {
            tracing::debug!("Ignoring stale snapshot fetched at {}", newer.fetched_at);
        }
    }

    /// Consumes the snapshot and returns the entities.
    #[must_use]
    pub fn into_inner(self) -> Vec<T> {
        self.items
    }
}

impl<T> Deref for Snapshot<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

impl<T> IntoIterator for Snapshot<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

/// Acknowledgement of a successful create, update, or delete.
///
/// The server answers mutations with a small object such as
/// `{"message": "Order created successfully", "order_id": 17}` rather than
/// echoing the entity.
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    message: Option<String>,
    assigned_id: Option<u64>,
    fields: Map<String, Value>,
}

impl Receipt {
    /// Builds a receipt from a response body.
    ///
    /// `id_key` names the field carrying a server-assigned identifier, if the
    /// resource has one (e.g., `product_id`).
    #[must_use]
    pub fn from_body(body: Value, id_key: Option<&str>) -> Self {
        let fields = match body {
            Value::Object(map) => map,
            Value::Null => Map::new(),
            other => {
                let mut map = Map::new();
                map.insert("value".to_string(), other);
                map
            }
        };

        let message = fields
            .get("message")
            .and_then(Value::as_str)
            .map(ToString::to_string);

        let assigned_id = id_key
            .and_then(|key| fields.get(key))
            .and_then(|value| match value {
                Value::Number(n) => n.as_u64(),
                Value::String(s) => s.parse().ok(),
                _ => None,
            });

        Self {
            message,
            assigned_id,
            fields,
        }
    }

    /// The server's confirmation message, or an empty string.
    #[must_use]
    pub fn message(&self) -> &str {
        self.message.as_deref().unwrap_or_default()
    }

    /// The identifier the server assigned to a newly created entity.
    #[must_use]
    pub const fn assigned_id(&self) -> Option<u64> {
        self.assigned_id
    }

    /// Raw access to any other field of the acknowledgement.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }
}
