//! # Back Office Client
//!
//! A typed async client for a commerce back office REST API: products,
//! inventory, customers, carts, and orders.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`ClientConfig`] and [`ClientConfigBuilder`]
//! - A validated [`BaseUrl`] newtype
//! - One generic [`ResourceClient`] for list/create/update/remove on any
//!   [`Resource`](rest::Resource)
//! - Typed resources in [`rest::resources`]
//! - A uniform failure taxonomy ([`FailureKind`]) on every [`Outcome`]
//! - Refresh hooks run after successful mutations
//! - The selected customer held in an injected [`SessionContext`]
//! - Display helpers in [`view`]
//!
//! ## Quick Start
//!
//! ```rust
//! use backoffice_client::{BaseUrl, ClientConfig, ResourceClient};
//!
//! let config = ClientConfig::builder()
//!     .base_url(BaseUrl::new("http://127.0.0.1:5000/api").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let client = ResourceClient::new(&config).unwrap();
//! ```
//!
//! ## Working with Resources
//!
//! ```rust,ignore
//! use backoffice_client::{ClientConfig, ResourceClient, SessionContext};
//! use backoffice_client::rest::Consent;
//! use backoffice_client::rest::resources::{InventoryItem, NewProduct, Product};
//!
//! let mut client = ResourceClient::new(&ClientConfig::from_env()?)?;
//! client.on_refresh::<InventoryItem>(|client| Box::pin(async move { /* reload the inventory table */ }));
//!
//! // Validation runs before anything is sent.
//! client.create::<Product, _>(&NewProduct::new("Lamp", 24.5, "Brass")).await?;
//!
//! // Deleting needs the user's consent.
//! if let Some(consent) = Consent::<Product>::request(&|prompt: &str| confirm_dialog(prompt)) {
//!     client.remove::<Product>(&7, consent).await?;
//! }
//!
//! // Cart and orders act for the selected customer.
//! let mut session = SessionContext::new();
//! session.select(42);
//! client.add_to_cart(&session, 7, 2).await?;
//! client.place_order(&session).await?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: configuration and the selected customer are passed explicitly
//! - **Fail-fast validation**: newtypes and payloads validate before use
//! - **One-shot requests**: nothing is retried
//! - **Thread-safe**: all types are `Send + Sync`
//! - **Async-first**: designed for use with the Tokio runtime

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;
pub mod session;
pub mod view;

// Re-export public types at crate root for convenience
pub use config::{BaseUrl, ClientConfig, ClientConfigBuilder, BASE_URL_ENV, DEFAULT_BASE_URL};
pub use error::ConfigError;
pub use session::SessionContext;

// Re-export HTTP client types
pub use clients::{
    DataType, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError,
};

// Re-export the resource layer essentials
pub use rest::{FailureKind, Outcome, Receipt, ResourceClient, ResourceError, Snapshot};
