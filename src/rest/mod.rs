//! Generic REST resource layer.
//!
//! - **[`Resource`] trait**: describes a collection (name, path templates, id)
//! - **[`Payload`] trait**: a request body with client-side validation
//! - **[`ResourceClient`]**: list/create/update/remove against any resource
//! - **[`Snapshot<T>`]** and **[`Receipt`]**: success payloads
//! - **[`ResourceError`]** and **[`FailureKind`]**: the failure taxonomy
//! - **[`Consent`]**: proof of user confirmation, required to delete
//! - **[`RefreshRegistry`]**: refresh hooks run after successful mutations
//!
//! # Example
//!
//! ```rust,ignore
//! use backoffice_client::{ClientConfig, ResourceClient};
//! use backoffice_client::rest::{Consent, FailureKind};
//! use backoffice_client::rest::resources::{Customer, CustomerDetails};
//!
//! let mut client = ResourceClient::new(&ClientConfig::local()?)?;
//! client.on_refresh::<Customer>(|client| Box::pin(async move { /* re-list via client */ }));
//!
//! match client
//!     .create::<Customer, _>(&CustomerDetails::new("Ada", "ada@example.com"))
//!     .await
//! {
//!     Ok(receipt) => println!("{}", receipt.message()),
//!     Err(e) if e.kind() == FailureKind::Conflict => println!("email taken"),
//!     Err(e) => println!("Error: {e}"),
//! }
//!
//! if let Some(consent) = Consent::<Customer>::request(&|prompt: &str| ask_user(prompt)) {
//!     client.remove::<Customer>(&5, consent).await?;
//! }
//! ```

mod client;
mod consent;
mod errors;
mod path;
mod refresh;
mod resource;
mod response;

pub mod resources;

pub use client::{RequestState, ResourceClient};
pub use consent::{Confirm, Consent};
pub use errors::{FailureKind, Outcome, ResourceError};
pub use path::{build_path, get_path, ResourceOperation, ResourcePath};
pub use refresh::{BoxFuture, RefreshHandler, RefreshRegistry};
pub use resource::{require_non_negative, require_text, Payload, Resource};
pub use response::{Receipt, Snapshot};
