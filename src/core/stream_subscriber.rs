//! Stream subscriber contract.

use std::sync::Arc;

use super::{Failure, StreamSubscription};

/// Consumer of one stream subscription.
///
/// Signals are never delivered concurrently; `on_complete` / `on_error`
/// are terminal and delivered at most once.
pub trait StreamSubscriber<T>: Send + Sync {
  /// Receives the subscription before any other signal.
  fn on_subscribe(&self, subscription: Arc<dyn StreamSubscription>);

  /// Receives one item; never exceeds requested demand.
  fn on_next(&self, item: T);

  /// Receives successful completion.
  fn on_complete(&self);

  /// Receives the terminal failure.
  fn on_error(&self, failure: Failure);
}
