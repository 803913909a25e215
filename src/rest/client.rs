//! The generic resource client.
//!
//! [`ResourceClient`] performs one HTTP operation against a [`Resource`] and
//! returns an [`Outcome`]. Mutations validate their payload before anything
//! is sent and run the registered refresh handlers after success.
//!
//! # Example
//!
//! ```rust,ignore
//! use backoffice_client::{ClientConfig, ResourceClient};
//! use backoffice_client::rest::resources::{NewProduct, Product};
//!
//! let client = ResourceClient::new(&ClientConfig::local()?)?;
//!
//! let receipt = client
//!     .create::<Product, _>(&NewProduct::new("Lamp", 24.5, "Brass desk lamp"))
//!     .await?;
//! println!("created product {:?}", receipt.assigned_id());
//!
//! for product in client.list::<Product>(None).await?.iter() {
//!     println!("{} {}", product.id, product.name);
//! }
//! ```

use std::collections::HashMap;
use std::fmt::{self, Display};

use serde_json::Value;

use crate::clients::{DataType, HttpClient, HttpRequest, HttpResponse};
use crate::config::ClientConfig;
use crate::error::ConfigError;
use crate::rest::consent::Consent;
use crate::rest::refresh::{BoxFuture, RefreshRegistry};
use crate::rest::resource::serialize_to_query;
use crate::rest::{
    build_path, get_path, FailureKind, Outcome, Payload, Receipt, Resource, ResourceError,
    ResourceOperation, Snapshot,
};

/// Lifecycle of a single request.
///
/// `Idle -> Sent -> Succeeded | Failed(kind) -> Idle`. Each call runs the
/// cycle once; nothing is retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestState {
    /// No request in flight.
    Idle,
    /// The request has been handed to the transport.
    Sent,
    /// The server answered with a 2xx status and a decodable body.
    Succeeded,
    /// The operation failed with the given kind.
    Failed(FailureKind),
}

impl RequestState {
    /// The state an operation settles in for the given result.
    #[must_use]
    pub fn settle<T>(result: &Outcome<T>) -> Self {
        match result {
            Ok(_) => Self::Succeeded,
            Err(e) => Self::Failed(e.kind()),
        }
    }
}

impl Display for RequestState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => f.write_str("idle"),
            Self::Sent => f.write_str("sent"),
            Self::Succeeded => f.write_str("succeeded"),
            Self::Failed(kind) => write!(f, "failed({kind})"),
        }
    }
}

/// Generic CRUD client for back office collections.
///
/// Operations take `&self`, so independent calls may be in flight at the same
/// time. Completion order is not guaranteed; see
/// [`Snapshot::replace_with`] for keeping the newest render.
///
/// # Thread Safety
///
/// `ResourceClient` is `Send + Sync`.
#[derive(Debug)]
pub struct ResourceClient {
    http_client: HttpClient,
    refresh: RefreshRegistry,
}

// Verify ResourceClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceClient>();
};

impl ResourceClient {
    /// Creates a client for the configured back office API.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClientInit`] if the HTTP client cannot be
    /// created.
    pub fn new(config: &ClientConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            http_client: HttpClient::new(config)?,
            refresh: RefreshRegistry::new(),
        })
    }

    /// Returns the underlying HTTP transport.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Registers the refresh handler for resource `R`'s collection.
    ///
    /// The handler is called with this client, typically to re-issue
    /// [`list`](Self::list) and replace the rendered [`Snapshot`]. Replaces
    /// any handler previously registered for the same collection.
    pub fn on_refresh<R: Resource>(
        &mut self,
        handler: impl for<'c> Fn(&'c Self) -> BoxFuture<'c, ()> + Send + Sync + 'static,
    ) {
        self.refresh.register(R::PLURAL, Box::new(handler));
    }

    /// Removes the refresh handler for resource `R`'s collection.
    pub fn clear_refresh<R: Resource>(&mut self) -> bool {
        self.refresh.unregister(R::PLURAL)
    }

    /// Reads the full collection.
    ///
    /// # Errors
    ///
    /// Returns a [`ResourceError`] if the server cannot be reached, answers
    /// with a non-2xx status, or returns a body that does not decode.
    pub async fn list<R: Resource>(&self, params: Option<R::ListParams>) -> Outcome<Snapshot<R>> {
        self.list_scoped::<R>(&HashMap::new(), params).await
    }

    /// Reads a collection scoped by a parent identifier in the path, such as
    /// the cart of one customer.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::PathResolutionFailed`] if `R` has no list
    /// path taking `parent_name`, plus everything [`list`](Self::list) can
    /// return.
    pub async fn list_in<R: Resource>(
        &self,
        parent_name: &'static str,
        parent_id: impl Display + Send,
        params: Option<R::ListParams>,
    ) -> Outcome<Snapshot<R>> {
        let mut ids = HashMap::new();
        ids.insert(parent_name, parent_id.to_string());
        self.list_scoped::<R>(&ids, params).await
    }

    async fn list_scoped<R: Resource>(
        &self,
        ids: &HashMap<&'static str, String>,
        params: Option<R::ListParams>,
    ) -> Outcome<Snapshot<R>> {
        let params = params.unwrap_or_default();
        let query = serialize_to_query(&params, R::NAME)?;
        let response = self
            .dispatch::<R>(ResourceOperation::List, ids, None, query)
            .await?;

        let body = R::normalize_collection(response.body, &params);
        let items: Vec<R> = serde_json::from_value(body).map_err(|source| {
            tracing::warn!("{} list returned an unexpected body: {source}", R::PLURAL);
            ResourceError::Malformed {
                resource: R::NAME,
                source,
            }
        })?;

        tracing::debug!("Fetched {} {}", items.len(), R::PLURAL);
        Ok(Snapshot::new(items))
    }

    /// Creates a new entity.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Validation`] without a network call if the
    /// payload fails its checks, [`ResourceError::Conflict`] on HTTP 409, and
    /// [`ResourceError::Rejected`] on any other non-2xx status.
    pub async fn create<R, P>(&self, payload: &P) -> Outcome<Receipt>
    where
        R: Resource,
        P: Payload<R>,
    {
        let body = Self::encode::<R, P>(payload)?;
        self.mutate::<R>(ResourceOperation::Create, &HashMap::new(), Some(body))
            .await
    }

    /// Updates the entity identified by `id`.
    ///
    /// # Errors
    ///
    /// Same as [`create`](Self::create).
    pub async fn update<R, P>(&self, id: &R::Id, payload: &P) -> Outcome<Receipt>
    where
        R: Resource,
        P: Payload<R>,
    {
        let body = Self::encode::<R, P>(payload)?;
        let mut ids = HashMap::new();
        ids.insert(R::ID_KEY, id.to_string());
        self.mutate::<R>(ResourceOperation::Update, &ids, Some(body))
            .await
    }

    /// Deletes the entity identified by `id`.
    ///
    /// A [`Consent`] for `R` must be obtained first, see [`Consent::request`]. Deleting
    /// an id that no longer exists yields the server's 404 as
    /// [`ResourceError::Rejected`].
    ///
    /// # Errors
    ///
    /// Returns a [`ResourceError`] if the server cannot be reached or answers
    /// with a non-2xx status.
    pub async fn remove<R: Resource>(&self, id: &R::Id, consent: Consent<R>) -> Outcome<()> {
        let mut ids = HashMap::new();
        ids.insert(R::ID_KEY, id.to_string());
        self.remove_with_ids::<R>(&ids, consent).await
    }

    /// Deletes an entity nested under a parent, such as one product in one
    /// customer's cart.
    ///
    /// # Errors
    ///
    /// Same as [`remove`](Self::remove).
    pub async fn remove_in<R: Resource>(
        &self,
        parent_name: &'static str,
        parent_id: impl Display + Send,
        id: &R::Id,
        consent: Consent<R>,
    ) -> Outcome<()> {
        let mut ids = HashMap::new();
        ids.insert(parent_name, parent_id.to_string());
        ids.insert(R::ID_KEY, id.to_string());
        self.remove_with_ids::<R>(&ids, consent).await
    }

    async fn remove_with_ids<R: Resource>(
        &self,
        ids: &HashMap<&'static str, String>,
        consent: Consent<R>,
    ) -> Outcome<()> {
        tracing::debug!("Deleting {} after \"{}\"", R::NAME, consent.prompt());
        self.mutate::<R>(ResourceOperation::Delete, ids, None)
            .await
            .map(|_| ())
    }

    fn encode<R, P>(payload: &P) -> Outcome<Value>
    where
        R: Resource,
        P: Payload<R>,
    {
        if let Err(e) = payload.validate() {
            tracing::debug!("{} payload rejected before sending: {e}", R::NAME);
            return Err(e);
        }
        serde_json::to_value(payload)
            .map_err(|e| ResourceError::validation(R::NAME, "payload", e.to_string()))
    }

    async fn mutate<R: Resource>(
        &self,
        operation: ResourceOperation,
        ids: &HashMap<&'static str, String>,
        body: Option<Value>,
    ) -> Outcome<Receipt> {
        let response = self
            .dispatch::<R>(operation, ids, body, HashMap::new())
            .await?;
        let receipt = Receipt::from_body(response.body, R::ASSIGNED_ID_KEY);

        self.refresh.run(self, R::PLURAL, R::AFFECTS).await;
        Ok(receipt)
    }

    async fn dispatch<R: Resource>(
        &self,
        operation: ResourceOperation,
        ids: &HashMap<&'static str, String>,
        body: Option<Value>,
        query: HashMap<String, String>,
    ) -> Outcome<HttpResponse> {
        let available: Vec<&str> = ids.keys().copied().collect();
        let path = get_path(R::PATHS, operation, &available).ok_or(
            ResourceError::PathResolutionFailed {
                resource: R::NAME,
                operation: operation.as_str(),
            },
        )?;
        let url = build_path(path.template, ids);

        let mut builder = HttpRequest::builder(path.http_method, url);
        if let Some(body) = body {
            builder = builder.body(body).body_type(DataType::Json);
        }
        if !query.is_empty() {
            builder = builder.query(query);
        }
        let request = builder
            .build()
            .map_err(|e| ResourceError::validation(R::NAME, "request", e.to_string()))?;

        tracing::debug!(
            "{} {operation}: {} -> {}",
            R::NAME,
            RequestState::Idle,
            RequestState::Sent
        );
        let result = self
            .http_client
            .request(request)
            .await
            .map_err(|e| ResourceError::from_http_error(e, R::NAME));

        let state = RequestState::settle(&result);
        match &result {
            Ok(_) => tracing::debug!("{} {operation}: {state}", R::NAME),
            Err(e) => tracing::warn!("{} {operation}: {state}: {e}", R::NAME),
        }
        result
    }
}
