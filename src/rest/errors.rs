//! Failure taxonomy for resource operations.
//!
//! Every operation on a [`ResourceClient`](crate::ResourceClient) returns an
//! [`Outcome`]. Failures are classified into a small set of kinds:
//!
//! - **[`FailureKind::Validation`]**: a client-side precondition failed; no request was sent
//! - **[`FailureKind::Network`]**: transport failure, no HTTP response obtained
//! - **[`FailureKind::Conflict`]**: HTTP 409, identity collision (e.g., duplicate email)
//! - **[`FailureKind::Rejected`]**: any other non-2xx response
//! - **[`FailureKind::Malformed`]**: a 2xx response whose body did not decode
//!
//! None of them is fatal; the caller decides how to present them.
//!
//! # Example
//!
//! ```rust,ignore
//! use backoffice_client::rest::{FailureKind, ResourceError};
//!
//! match client.create::<Customer, _>(&new_customer).await {
//!     Ok(receipt) => println!("{}", receipt.message()),
//!     Err(ResourceError::Conflict { message, .. }) => println!("{message}"),
//!     Err(e) if e.kind() == FailureKind::Network => println!("offline: {e}"),
//!     Err(e) => println!("Error: {e}"),
//! }
//! ```

use std::fmt;

use crate::clients::{HttpError, HttpResponseError};
use thiserror::Error;

/// The result of one resource operation.
pub type Outcome<T> = Result<T, ResourceError>;

/// Classification of a failed operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// A client-side precondition failed before any network call.
    Validation,
    /// Transport-level failure; no HTTP response was obtained.
    Network,
    /// HTTP 409.
    Conflict,
    /// Any other non-2xx HTTP response.
    Rejected,
    /// A successful response whose body did not have the expected shape.
    Malformed,
}

impl FailureKind {
    /// Returns the kind name as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Network => "network",
            Self::Conflict => "conflict",
            Self::Rejected => "rejected",
            Self::Malformed => "malformed",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error type for resource operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// A client-side precondition failed. No request was sent.
    #[error("Invalid {field} for {resource}: {reason}")]
    Validation {
        /// The resource the payload was meant for.
        resource: &'static str,
        /// The offending field.
        field: &'static str,
        /// Human-readable reason.
        reason: String,
    },

    /// The server reported an identity collision (HTTP 409).
    #[error("{resource} conflict: {message}")]
    Conflict {
        /// The resource type name.
        resource: &'static str,
        /// The server-supplied message.
        message: String,
    },

    /// The server rejected the request with a non-2xx status.
    #[error("{resource} request rejected ({status}): {message}")]
    Rejected {
        /// The resource type name.
        resource: &'static str,
        /// The HTTP status code.
        status: u16,
        /// The server-supplied message, or the status text.
        message: String,
    },

    /// No HTTP response was obtained (DNS, connection refused, timeout).
    #[error("Network failure while contacting {resource}: {source}")]
    Network {
        /// The resource type name.
        resource: &'static str,
        /// The underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// The response body could not be decoded into the expected type.
    #[error("Unexpected {resource} response body: {source}")]
    Malformed {
        /// The resource type name.
        resource: &'static str,
        /// The decoding error.
        #[source]
        source: serde_json::Error,
    },

    /// No path template matches the operation and the provided IDs.
    #[error("Cannot resolve path for {resource}::{operation} with provided IDs")]
    PathResolutionFailed {
        /// The resource type name.
        resource: &'static str,
        /// The operation being attempted (e.g., "list", "delete").
        operation: &'static str,
    },
}

impl ResourceError {
    /// Builds a validation failure.
    #[must_use]
    pub fn validation(
        resource: &'static str,
        field: &'static str,
        reason: impl Into<String>,
    ) -> Self {
        Self::Validation {
            resource,
            field,
            reason: reason.into(),
        }
    }

    /// Maps an [`HttpError`] onto the failure taxonomy.
    ///
    /// - `Response` with 409 -> `Conflict`
    /// - `Response` otherwise -> `Rejected`
    /// - `Network` -> `Network`
    /// - `InvalidRequest` -> `Validation` (nothing was sent)
    #[must_use]
    pub fn from_http_error(error: HttpError, resource: &'static str) -> Self {
        match error {
            HttpError::Response(response) => Self::from_response_error(response, resource),
            HttpError::Network(source) => Self::Network { resource, source },
            HttpError::InvalidRequest(e) => Self::validation(resource, "request", e.to_string()),
        }
    }

    fn from_response_error(error: HttpResponseError, resource: &'static str) -> Self {
        match error.code {
            409 => Self::Conflict {
                resource,
                message: error.message,
            },
            status => Self::Rejected {
                resource,
                status,
                message: error.message,
            },
        }
    }

    /// Returns the failure classification.
    #[must_use]
    pub const fn kind(&self) -> FailureKind {
        match self {
            Self::Validation { .. } | Self::PathResolutionFailed { .. } => {
                FailureKind::Validation
            }
            Self::Conflict { .. } => FailureKind::Conflict,
            Self::Rejected { .. } => FailureKind::Rejected,
            Self::Network { .. } => FailureKind::Network,
            Self::Malformed { .. } => FailureKind::Malformed,
        }
    }

    /// Returns the HTTP status, when the server answered.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Conflict { .. } => Some(409),
            Self::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns `true` if the server answered 404.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self.status(), Some(404))
    }

    /// Returns the server-supplied message, if the server answered.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Conflict { message, .. } | Self::Rejected { message, .. } => Some(message),
            _ => None,
        }
    }
}
