//! HTTP response types.
//!
//! This module provides the [`HttpResponse`] type for accessing the status,
//! headers and decoded JSON body of an API response.

use std::collections::HashMap;

use serde_json::Value;

/// An HTTP response from the back office API.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, lowercased (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body.
    pub body: Value,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub const fn new(code: u16, headers: HashMap<String, Vec<String>>, body: Value) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the canonical reason phrase for the status code
    /// (e.g., "Not Found"), or an empty string for unknown codes.
    #[must_use]
    pub fn status_text(&self) -> &'static str {
        status_text(self.code)
    }

    /// Extracts the server-supplied error message from the body.
    ///
    /// Looks at `error`, then `errors`, then `message`, then a raw body
    /// captured for unparseable 5xx responses. Falls back to the status text.
    #[must_use]
    pub fn error_message(&self) -> String {
        let from_body = ["error", "errors", "message", "raw_body"]
            .iter()
            .find_map(|key| match self.body.get(*key) {
                Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
                Some(Value::Null) | None => None,
                Some(Value::String(_)) => None,
                Some(other) => Some(other.to_string()),
            });

        from_body.unwrap_or_else(|| {
            let text = self.status_text();
            if text.is_empty() {
                format!("HTTP {}", self.code)
            } else {
                text.to_string()
            }
        })
    }
}

/// Canonical reason phrase for an HTTP status code.
fn status_text(code: u16) -> &'static str {
    reqwest::StatusCode::from_u16(code)
        .ok()
        .and_then(|status| status.canonical_reason())
        .unwrap_or("")
}
