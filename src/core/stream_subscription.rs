//! Stream subscription contract.

/// Demand signaling and cancellation for one stream subscription.
pub trait StreamSubscription: Send + Sync {
  /// Grants the producer permission to emit `count` further items.
  fn request(&self, count: u64);

  /// Requests cancellation; the producer stops emitting once observed.
  fn cancel(&self);
}
