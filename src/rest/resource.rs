//! The [`Resource`] and [`Payload`] traits.
//!
//! A resource is a REST collection identified by its path templates. Entity
//! types implement [`Resource`] to describe where they live and how they are
//! identified; request bodies implement [`Payload`] to declare the
//! client-side checks that must pass before anything is sent.
//!
//! # Implementing a Resource
//!
//! ```rust,ignore
//! use backoffice_client::rest::{
//!     require_text, Payload, Resource, ResourceError, ResourceOperation, ResourcePath,
//! };
//! use backoffice_client::HttpMethod;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Clone, Deserialize)]
//! pub struct Supplier {
//!     pub id: u64,
//!     pub name: String,
//! }
//!
//! impl Resource for Supplier {
//!     type Id = u64;
//!     type ListParams = ();
//!
//!     const NAME: &'static str = "Supplier";
//!     const PLURAL: &'static str = "suppliers";
//!     const PATHS: &'static [ResourcePath] = &[
//!         ResourcePath::new(HttpMethod::Get, ResourceOperation::List, &[], "suppliers"),
//!         ResourcePath::new(HttpMethod::Post, ResourceOperation::Create, &[], "suppliers"),
//!     ];
//!
//!     fn id(&self) -> u64 {
//!         self.id
//!     }
//! }
//!
//! #[derive(Serialize)]
//! pub struct NewSupplier {
//!     pub name: String,
//! }
//!
//! impl Payload<Supplier> for NewSupplier {
//!     fn validate(&self) -> Result<(), ResourceError> {
//!         require_text::<Supplier>("name", &self.name)
//!     }
//! }
//! ```

use std::collections::HashMap;
use std::fmt::Display;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::rest::{ResourceError, ResourcePath};

/// A REST collection and the entity type it holds.
///
/// # Associated Constants
///
/// - `NAME`: singular name used in errors and logs (e.g., "Product")
/// - `PLURAL`: collection name, also the refresh key (e.g., "products")
/// - `PATHS`: path templates for each supported operation
/// - `ID_KEY`: placeholder name of the entity identifier in `PATHS`
/// - `ASSIGNED_ID_KEY`: acknowledgement field carrying a server-assigned id
/// - `AFFECTS`: other collections a successful mutation changes server-side
/// - `DELETE_PROMPT`: the question a caller should ask before deleting
pub trait Resource: DeserializeOwned + Clone + Send + Sync + Sized {
    /// The type of the entity's identifier.
    type Id: Display + Clone + Send + Sync;

    /// Query parameters accepted by `list`. Use `()` if there are none.
    type ListParams: Serialize + Default + Send + Sync;

    /// The singular name of the resource.
    const NAME: &'static str;

    /// The plural collection name.
    const PLURAL: &'static str;

    /// Available paths for this resource.
    const PATHS: &'static [ResourcePath];

    /// Placeholder used for the entity identifier in path templates.
    const ID_KEY: &'static str = "id";

    /// Field of a create acknowledgement that carries the new identifier.
    const ASSIGNED_ID_KEY: Option<&'static str> = None;

    /// Collections that must be refreshed alongside this one after a
    /// successful mutation.
    const AFFECTS: &'static [&'static str] = &[];

    /// Confirmation question shown before a delete.
    const DELETE_PROMPT: &'static str = "Are you sure you want to delete this item?";

    /// Returns the entity's server-assigned identifier.
    fn id(&self) -> Self::Id;

    /// Rewrites a raw collection body before it is decoded.
    ///
    /// The default is the identity. Resources whose server answers with a
    /// sentinel instead of an empty array, or omits fields implied by the
    /// filter, normalize them here.
    fn normalize_collection(body: Value, _params: &Self::ListParams) -> Value {
        body
    }
}

/// A request body destined for resource `R`.
///
/// `validate` runs before the request is built. A failure short-circuits
/// the operation with [`ResourceError::Validation`] and no network call.
pub trait Payload<R: Resource>: Serialize + Send + Sync {
    /// Checks client-side preconditions.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Validation`] naming the offending field.
    fn validate(&self) -> Result<(), ResourceError> {
        Ok(())
    }
}

/// Fails validation when `value` is empty or whitespace.
///
/// # Errors
///
/// Returns [`ResourceError::Validation`] for blank text.
pub fn require_text<R: Resource>(field: &'static str, value: &str) -> Result<(), ResourceError> {
    if value.trim().is_empty() {
        return Err(ResourceError::validation(R::NAME, field, "is required"));
    }
    Ok(())
}

/// Fails validation when `value` is negative or not a finite number.
///
/// # Errors
///
/// Returns [`ResourceError::Validation`] for negative, NaN, or infinite values.
pub fn require_non_negative<R: Resource>(
    field: &'static str,
    value: f64,
) -> Result<(), ResourceError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ResourceError::validation(
            R::NAME,
            field,
            format!("must be a non-negative number, got {value}"),
        ));
    }
    Ok(())
}

/// Serializes a params struct to a query parameter map.
pub(crate) fn serialize_to_query<T: Serialize>(
    params: &T,
    resource: &'static str,
) -> Result<HashMap<String, String>, ResourceError> {
    let value = serde_json::to_value(params)
        .map_err(|e| ResourceError::validation(resource, "params", e.to_string()))?;

    let mut query = HashMap::new();

    if let Value::Object(map) = value {
        for (key, val) in map {
            match val {
                Value::Null => {}
                Value::String(s) => {
                    query.insert(key, s);
                }
                Value::Number(n) => {
                    query.insert(key, n.to_string());
                }
                Value::Bool(b) => {
                    query.insert(key, b.to_string());
                }
                Value::Array(_) | Value::Object(_) => {
                    query.insert(key, val.to_string());
                }
            }
        }
    }

    Ok(query)
}
