//! Scriptable stream source test support.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use super::super::{lock_or_recover, Failure, StreamPublisher, StreamSubscriber, StreamSubscription};

struct SourceInner<T> {
  subscriber: Mutex<Option<Arc<dyn StreamSubscriber<T>>>>,
  requested:  Arc<AtomicU64>,
  cancelled:  Arc<AtomicBool>,
}

/// Manually driven stream publisher for tests.
///
/// Supports one subscriber at a time; signals are pushed from the test
/// body with `push` / `complete` / `fail`, and the demand and cancellation
/// the subscriber issued stay observable.
pub struct TestStreamSource<T> {
  inner: Arc<SourceInner<T>>,
}

impl<T> TestStreamSource<T> {
  #[must_use]
  pub fn new() -> Self {
    Self {
      inner: Arc::new(SourceInner {
        subscriber: Mutex::new(None),
        requested:  Arc::new(AtomicU64::new(0)),
        cancelled:  Arc::new(AtomicBool::new(false)),
      }),
    }
  }

  /// Returns `true` once a subscriber has attached.
  #[must_use]
  pub fn is_subscribed(&self) -> bool {
    lock_or_recover(&self.inner.subscriber).is_some()
  }

  /// Returns `true` once the subscriber cancelled.
  #[must_use]
  pub fn is_cancelled(&self) -> bool {
    self.inner.cancelled.load(Ordering::Acquire)
  }

  /// Total demand the subscriber has requested so far.
  #[must_use]
  pub fn requested(&self) -> u64 {
    self.inner.requested.load(Ordering::Acquire)
  }

  /// Pushes one item to the subscriber.
  ///
  /// Panics unless a subscriber is attached.
  pub fn push(&self, item: T) {
    self.current_subscriber().on_next(item);
  }

  /// Completes the subscriber's stream.
  pub fn complete(&self) {
    self.current_subscriber().on_complete();
  }

  /// Fails the subscriber's stream.
  pub fn fail(&self, failure: Failure) {
    self.current_subscriber().on_error(failure);
  }

  fn current_subscriber(&self) -> Arc<dyn StreamSubscriber<T>> {
    match lock_or_recover(&self.inner.subscriber).clone() {
      | Some(subscriber) => subscriber,
      | None => panic!("source has no subscriber"),
    }
  }
}

impl<T> Clone for TestStreamSource<T> {
  fn clone(&self) -> Self {
    Self { inner: Arc::clone(&self.inner) }
  }
}

impl<T> Default for TestStreamSource<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T> StreamPublisher<T> for TestStreamSource<T>
where
  T: Send + Sync + 'static,
{
  fn subscribe(&self, subscriber: Arc<dyn StreamSubscriber<T>>) {
    *lock_or_recover(&self.inner.subscriber) = Some(Arc::clone(&subscriber));
    let subscription = Arc::new(SourceSubscription {
      requested: Arc::clone(&self.inner.requested),
      cancelled: Arc::clone(&self.inner.cancelled),
    });
    subscriber.on_subscribe(subscription);
  }
}

struct SourceSubscription {
  requested: Arc<AtomicU64>,
  cancelled: Arc<AtomicBool>,
}

impl StreamSubscription for SourceSubscription {
  fn request(&self, count: u64) {
    self.requested.fetch_add(count, Ordering::AcqRel);
  }

  fn cancel(&self) {
    self.cancelled.store(true, Ordering::Release);
  }
}
