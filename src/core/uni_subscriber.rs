//! Uni subscriber contract.

use std::sync::Arc;

use super::{Failure, UniSubscription};

/// Consumer of one Uni subscription.
///
/// For every subscription, `on_subscribe` is delivered exactly once before
/// any other signal, followed by at most one of `on_item` / `on_failure`.
/// An absent item (`None`) is a valid resolution, not a failure.
pub trait UniSubscriber<T>: Send + Sync {
  /// Receives the cancellation handle before any terminal signal.
  fn on_subscribe(&self, subscription: UniSubscription);

  /// Receives the resolved item, possibly absent.
  fn on_item(&self, item: Option<T>);

  /// Receives the terminal failure.
  fn on_failure(&self, failure: Failure);
}

impl<T, S> UniSubscriber<T> for Arc<S>
where
  S: UniSubscriber<T> + ?Sized,
{
  fn on_subscribe(&self, subscription: UniSubscription) {
    self.as_ref().on_subscribe(subscription);
  }

  fn on_item(&self, item: Option<T>) {
    self.as_ref().on_item(item);
  }

  fn on_failure(&self, failure: Failure) {
    self.as_ref().on_failure(failure);
  }
}
