//! Stream publisher contract.

use std::sync::Arc;

use super::StreamSubscriber;

/// Cold multi-value source honoring request-based backpressure.
///
/// May be subscribed multiple times; each subscription is independent.
pub trait StreamPublisher<T>: Send + Sync {
  /// Subscribes the given consumer.
  fn subscribe(&self, subscriber: Arc<dyn StreamSubscriber<T>>);
}
