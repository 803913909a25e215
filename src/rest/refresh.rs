//! Refresh hooks run after successful mutations.
//!
//! A caller that renders a collection registers a [`RefreshHandler`] under the
//! collection's plural name. After every successful `create`, `update`, or
//! `remove`, the [`ResourceClient`] awaits the handler for the mutated
//! collection and for every collection listed in
//! [`Resource::AFFECTS`](crate::rest::Resource::AFFECTS).
//!
//! Handlers receive the client that ran the mutation, so they re-list through
//! the same connection pool and base URL.
//!
//! Failed operations never trigger a refresh.

use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::pin::Pin;

use crate::rest::ResourceClient;

/// A boxed future that is `Send`.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// A refresh action for one collection.
///
/// Implemented for any closure of the shape
/// `Fn(&ResourceClient) -> BoxFuture<'_, ()>`, so most callers never
/// implement it by hand:
///
/// ```rust,ignore
/// client.on_refresh::<Product>(move |client| {
///     let view = Arc::clone(&view);
///     Box::pin(async move {
///         if let Ok(snapshot) = client.list::<Product>(None).await {
///             view.lock().unwrap().replace_with(snapshot);
///         }
///     })
/// });
/// ```
pub trait RefreshHandler: Send + Sync {
    /// Re-reads the collection through `client` and re-renders it.
    fn refresh<'a>(&'a self, client: &'a ResourceClient) -> BoxFuture<'a, ()>;
}

impl<F> RefreshHandler for F
where
    F: for<'c> Fn(&'c ResourceClient) -> BoxFuture<'c, ()> + Send + Sync,
{
    fn refresh<'a>(&'a self, client: &'a ResourceClient) -> BoxFuture<'a, ()> {
        self(client)
    }
}

/// Refresh handlers keyed by collection name.
#[derive(Default)]
pub struct RefreshRegistry {
    handlers: HashMap<&'static str, Box<dyn RefreshHandler>>,
}

impl fmt::Debug for RefreshRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<_> = self.handlers.keys().collect();
        keys.sort();
        f.debug_struct("RefreshRegistry")
            .field("handlers", &keys)
            .finish()
    }
}

// Verify RefreshRegistry is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RefreshRegistry>();
};

impl RefreshRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` for `collection`, replacing any previous one.
    pub fn register(&mut self, collection: &'static str, handler: Box<dyn RefreshHandler>) {
        if self.handlers.insert(collection, handler).is_some() {
            tracing::debug!("Replaced refresh handler for {collection}");
        }
    }

    /// Removes the handler for `collection`. Returns `true` if one existed.
    pub fn unregister(&mut self, collection: &str) -> bool {
        self.handlers.remove(collection).is_some()
    }

    /// Awaits the handlers for `primary` and then for each of `affected`,
    /// in order. Collections without a handler are skipped, and a collection
    /// named twice is refreshed once.
    pub async fn run(&self, client: &ResourceClient, primary: &str, affected: &[&str]) {
        let mut seen: Vec<&str> = Vec::with_capacity(affected.len() + 1);
        for collection in std::iter::once(primary).chain(affected.iter().copied()) {
            if seen.contains(&collection) {
                continue;
            }
            seen.push(collection);

            if let Some(handler) = self.handlers.get(collection) {
                tracing::debug!("Refreshing {collection}");
                handler.refresh(client).await;
            }
        }
    }
}
