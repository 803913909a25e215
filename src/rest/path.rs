//! Path templates for REST resources.
//!
//! Each resource declares one [`ResourcePath`] per supported operation. A
//! template names the identifiers it needs (`cart/{customer_id}/{product_id}`),
//! and [`get_path`] picks the most specific template whose identifiers are
//! all available.
//!
//! # Example
//!
//! ```rust
//! use backoffice_client::rest::{ResourcePath, ResourceOperation, get_path, build_path};
//! use backoffice_client::HttpMethod;
//! use std::collections::HashMap;
//!
//! const PATHS: &[ResourcePath] = &[
//!     ResourcePath::new(HttpMethod::Get, ResourceOperation::List, &["customer_id"], "cart/{customer_id}"),
//!     ResourcePath::new(
//!         HttpMethod::Delete,
//!         ResourceOperation::Delete,
//!         &["customer_id", "product_id"],
//!         "cart/{customer_id}/{product_id}",
//!     ),
//! ];
//!
//! let path = get_path(PATHS, ResourceOperation::Delete, &["customer_id", "product_id"]).unwrap();
//!
//! let mut ids = HashMap::new();
//! ids.insert("customer_id", "4");
//! ids.insert("product_id", "11");
//! assert_eq!(build_path(path.template, &ids), "cart/4/11");
//! ```

use crate::clients::HttpMethod;
use std::collections::HashMap;
use std::fmt::{self, Display};

/// Operations that can be performed on a REST resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceOperation {
    /// Read the whole collection (GET /resources).
    List,
    /// Create a new entity (POST /resources).
    Create,
    /// Update an existing entity (PUT /resources/{id}).
    Update,
    /// Delete an entity (DELETE /resources/{id}).
    Delete,
}

impl ResourceOperation {
    /// Returns the operation name as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

impl Display for ResourceOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A path configuration for a REST resource operation.
///
/// Templates use `{id_name}` placeholders for ID interpolation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourcePath {
    /// The HTTP method for this path.
    pub http_method: HttpMethod,
    /// The operation this path is used for.
    pub operation: ResourceOperation,
    /// Required ID parameters in order (e.g., `["customer_id", "product_id"]`).
    pub ids: &'static [&'static str],
    /// The URL template with `{id}` placeholders.
    pub template: &'static str,
}

impl ResourcePath {
    /// Creates a new `ResourcePath`.
    #[must_use]
    pub const fn new(
        http_method: HttpMethod,
        operation: ResourceOperation,
        ids: &'static [&'static str],
        template: &'static str,
    ) -> Self {
        Self {
            http_method,
            operation,
            ids,
            template,
        }
    }

    /// Returns the number of required IDs for this path.
    #[must_use]
    pub const fn id_count(&self) -> usize {
        self.ids.len()
    }

    /// Checks if all required IDs are available.
    #[must_use]
    pub fn matches_ids(&self, available_ids: &[&str]) -> bool {
        self.ids.iter().all(|id| available_ids.contains(id))
    }
}

/// Selects the best matching path for an operation.
///
/// Among the paths for `operation` whose required IDs are all available,
/// the one with the most IDs wins.
#[must_use]
pub fn get_path<'a>(
    paths: &'a [ResourcePath],
    operation: ResourceOperation,
    available_ids: &[&str],
) -> Option<&'a ResourcePath> {
    paths
        .iter()
        .filter(|p| p.operation == operation)
        .filter(|p| p.matches_ids(available_ids))
        .max_by_key(|p| p.id_count())
}

/// Builds a URL path from a template by interpolating IDs.
///
/// Values are percent-encoded so an identifier can never introduce extra
/// path segments. Placeholders without a value are left as-is.
#[must_use]
pub fn build_path<V: Display>(template: &str, ids: &HashMap<&str, V>) -> String {
    let mut result = template.to_string();
    for (key, value) in ids {
        let placeholder = format!("{{{key}}}");
        let encoded = urlencoding::encode(&value.to_string()).into_owned();
        result = result.replace(&placeholder, &encoded);
    }
    result
}
