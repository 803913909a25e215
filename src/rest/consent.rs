//! Delete confirmation.
//!
//! Deleting is only possible with a [`Consent`] token, and the only way to
//! get one is to ask a [`Confirm`] implementation and receive a yes. How the
//! question is asked (dialog, terminal prompt, test stub) is up to the caller.
//!
//! A consent is typed by the resource whose prompt was answered, so a yes to
//! removing a cart line cannot authorize removing a customer:
//!
//! ```compile_fail
//! use backoffice_client::rest::Consent;
//! use backoffice_client::rest::resources::{CartItem, Customer};
//!
//! let cart_line: Consent<CartItem> = Consent::request(&|_: &str| true).unwrap();
//! let customer: Consent<Customer> = cart_line;
//! ```

use std::fmt;
use std::marker::PhantomData;

use crate::rest::Resource;

/// Something that can ask the user a yes/no question.
pub trait Confirm {
    /// Returns `true` if the user agreed.
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Proof that the user agreed to delete one `R`.
///
/// Not `Clone`: each delete consumes its own consent.
pub struct Consent<R: Resource> {
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource> Consent<R> {
    /// Asks `confirm` the resource's [`DELETE_PROMPT`](Resource::DELETE_PROMPT).
    ///
    /// Returns `None` when the user declines.
    #[must_use]
    pub fn request(confirm: &impl Confirm) -> Option<Self> {
        if confirm.confirm(R::DELETE_PROMPT) {
            Some(Self {
                _resource: PhantomData,
            })
        } else {
            tracing::debug!("Delete of {} declined", R::NAME);
            None
        }
    }

    /// The question that was answered.
    #[must_use]
    pub const fn prompt(&self) -> &'static str {
        R::DELETE_PROMPT
    }
}

impl<R: Resource> fmt::Debug for Consent<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Consent")
            .field("resource", &R::NAME)
            .field("prompt", &R::DELETE_PROMPT)
            .finish()
    }
}
