//! The selected-customer context.
//!
//! Cart and order operations act on behalf of one customer. The choice is
//! held in a [`SessionContext`] that the caller owns and passes in. It
//! serializes to JSON so it can be persisted wherever the caller keeps state.
//!
//! ```rust
//! use backoffice_client::SessionContext;
//!
//! let mut session = SessionContext::new();
//! assert!(session.selected_customer().is_none());
//!
//! session.select(42);
//! let saved = serde_json::to_string(&session).unwrap();
//! let restored: SessionContext = serde_json::from_str(&saved).unwrap();
//! assert_eq!(restored.selected_customer(), Some(42));
//! ```

use serde::{Deserialize, Serialize};

use crate::rest::{Resource, ResourceError};

/// Holds the customer whose cart and orders are being worked on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionContext {
    #[serde(default)]
    selected_customer: Option<u64>,
}

impl SessionContext {
    /// Creates a context with no customer selected.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            selected_customer: None,
        }
    }

    /// Creates a context with `customer_id` selected.
    #[must_use]
    pub const fn for_customer(customer_id: u64) -> Self {
        Self {
            selected_customer: Some(customer_id),
        }
    }

    /// Selects a customer, replacing any previous choice.
    pub fn select(&mut self, customer_id: u64) {
        tracing::debug!("Selected customer {customer_id}");
        self.selected_customer = Some(customer_id);
    }

    /// Clears the selection.
    pub fn clear(&mut self) {
        self.selected_customer = None;
    }

    /// The selected customer, if any.
    #[must_use]
    pub const fn selected_customer(&self) -> Option<u64> {
        self.selected_customer
    }

    /// Returns the selected customer, or a validation failure for `R`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Validation`] on field `customer_id` when no
    /// customer is selected.
    pub fn require_customer<R: Resource>(&self) -> Result<u64, ResourceError> {
        self.selected_customer
            .ok_or_else(|| ResourceError::validation(R::NAME, "customer_id", "no customer selected"))
    }
}
