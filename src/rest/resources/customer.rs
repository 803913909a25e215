//! Customer resource implementation.
//!
//! Deleting a customer also deletes their cart rows server-side.

use serde::{Deserialize, Serialize};

use crate::rest::resource::require_text;
use crate::rest::{Payload, Resource, ResourceError, ResourceOperation, ResourcePath};
use crate::HttpMethod;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Customer {
    pub id: u64,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl Resource for Customer {
    type Id = u64;
    type ListParams = ();

    const NAME: &'static str = "Customer";
    const PLURAL: &'static str = "customers";
    const AFFECTS: &'static [&'static str] = &["cart"];
    const DELETE_PROMPT: &'static str =
        "Are you sure you want to delete this customer? This action cannot be undone.";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(HttpMethod::Get, ResourceOperation::List, &[], "customers"),
        ResourcePath::new(
            HttpMethod::Post,
            ResourceOperation::Create,
            &[],
            "customers",
        ),
        ResourcePath::new(
            HttpMethod::Put,
            ResourceOperation::Update,
            &["id"],
            "customers/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["id"],
            "customers/{id}",
        ),
    ];

    fn id(&self) -> u64 {
        self.id
    }
}

/// Body of `POST /customers` and `PUT /customers/{id}`.
///
/// The server answers 409 when `email` belongs to another customer.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CustomerDetails {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl CustomerDetails {
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            address: None,
        }
    }

    #[must_use]
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }
}

impl Payload<Customer> for CustomerDetails {
    fn validate(&self) -> Result<(), ResourceError> {
        require_text::<Customer>("name", &self.name)?;
        require_text::<Customer>("email", &self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_customer_deserialization_without_address() {
        let customer: Customer =
            serde_json::from_value(json!({"id": 5, "name": "Ada", "email": "ada@example.com"}))
                .unwrap();
        assert_eq!(customer.id(), 5);
        assert!(customer.address.is_none());
    }

    #[test]
    fn test_customer_details_validation() {
        assert!(CustomerDetails::new("Ada", "ada@example.com").validate().is_ok());

        let error = CustomerDetails::new("Ada", "").validate().unwrap_err();
        assert!(matches!(error, ResourceError::Validation { field: "email", .. }));

        let error = CustomerDetails::new("  ", "ada@example.com")
            .validate()
            .unwrap_err();
        assert!(matches!(error, ResourceError::Validation { field: "name", .. }));
    }

    #[test]
    fn test_customer_details_serialization_skips_missing_address() {
        let body = serde_json::to_value(CustomerDetails::new("Ada", "ada@example.com")).unwrap();
        assert_eq!(body, json!({"name": "Ada", "email": "ada@example.com"}));

        let body = serde_json::to_value(
            CustomerDetails::new("Ada", "ada@example.com").with_address("1 Loop Rd"),
        )
        .unwrap();
        assert_eq!(body["address"], "1 Loop Rd");
    }
}
