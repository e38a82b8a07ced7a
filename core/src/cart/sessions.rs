// bakery/src/cart/sessions.rs

//! Keeps one cart per browsing session.

use parking_lot::Mutex;
use std::collections::HashMap;
use std::fmt;
use tracing::{event, Level};

use super::store::Cart;
use crate::shared::Shared;

/// The injected Cart Store handle. Views hold clones of it; the cart itself
/// is only ever touched through its lock.
pub type CartHandle = Shared<Cart>;

/// Opaque identifier of a browsing session.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
  /// `None` for blank identifiers.
  pub fn parse(raw: &str) -> Option<Self> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| SessionId(trimmed.to_string()))
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl fmt::Display for SessionId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

#[derive(Default)]
pub struct CartSessions {
  carts: Mutex<HashMap<SessionId, CartHandle>>,
}

impl CartSessions {
  pub fn new() -> Self {
    Self::default()
  }

  /// The cart of `session`, created empty on first use.
  pub fn cart_for(&self, session: &SessionId) -> CartHandle {
    let mut carts = self.carts.lock();
    carts
      .entry(session.clone())
      .or_insert_with(|| {
        event!(Level::DEBUG, %session, "Opening cart for new session.");
        CartHandle::default()
      })
      .clone()
  }

  /// Drops the cart of `session`; handles still held elsewhere keep working
  /// on the detached cart.
  pub fn discard(&self, session: &SessionId) -> bool {
    let removed = self.carts.lock().remove(session).is_some();
    if removed {
      event!(Level::DEBUG, %session, "Session cart discarded.");
    }
    removed
  }

  pub fn len(&self) -> usize {
    self.carts.lock().len()
  }

  pub fn is_empty(&self) -> bool {
    self.carts.lock().is_empty()
  }
}
