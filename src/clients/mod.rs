//! HTTP transport for back office API communication.
//!
//! # Overview
//!
//! - [`HttpClient`]: The async one-shot HTTP client
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A parsed response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`DataType`]: Content types for request bodies
//!
//! Most callers use [`ResourceClient`](crate::ResourceClient) instead of this
//! layer directly.
//!
//! # Example
//!
//! ```rust,ignore
//! use backoffice_client::ClientConfig;
//! use backoffice_client::clients::{HttpClient, HttpRequest, HttpMethod};
//!
//! let client = HttpClient::new(&ClientConfig::local()?)?;
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "products")
//!     .build()
//!     .unwrap();
//!
//! let response = client.request(request).await?;
//! ```
//!
//! # Retry Behavior
//!
//! None. Each request is sent once; failures are returned to the caller.

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, CLIENT_VERSION};
pub use http_request::{DataType, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
