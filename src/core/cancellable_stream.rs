//! Cancellable stream wrapper.


use core::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::{Arc, Mutex};

use super::{lock_or_recover, Failure, StreamPublisher, StreamSubscriber, StreamSubscription};

const IDLE: u8 = 0;
const SUBSCRIBED: u8 = 1;
const CANCELLED: u8 = 2;

/// Wrapper that can cancel a cold publisher before or after subscription.
///
/// When cancelled while idle, the wrapped publisher is never subscribed, so
/// none of its production side effects run. When cancelled after
/// subscription, exactly that one subscription is cancelled. Both paths are
/// idempotent.
pub struct CancellableStream<T> {
  upstream:         Arc<dyn StreamPublisher<T>>,
  state:            AtomicU8,
  cancel_requested: Arc<AtomicBool>,
  active:           Arc<Mutex<Option<Arc<dyn StreamSubscription>>>>,
}

impl<T> CancellableStream<T>
where
  T: Send + Sync + 'static,
{
  /// Wraps the given publisher.
  pub fn new(upstream: Arc<dyn StreamPublisher<T>>) -> Self {
    Self {
      upstream,
      state: AtomicU8::new(IDLE),
      cancel_requested: Arc::new(AtomicBool::new(false)),
      active: Arc::new(Mutex::new(None)),
    }
  }

  /// Cancels the wrapped pipeline whether or not it was ever subscribed.
  pub fn cancel_if_not_subscribed(&self) {
    self.cancel_requested.store(true, Ordering::Release);
    if self
      .state
      .compare_exchange(IDLE, CANCELLED, Ordering::AcqRel, Ordering::Acquire)
      .is_ok()
    {
      return;
    }
    let active = lock_or_recover(&self.active).clone();
    if let Some(subscription) = active {
      subscription.cancel();
    }
  }

  /// Returns `true` when cancellation was requested before subscription.
  #[must_use]
  pub fn is_cancelled(&self) -> bool {
    self.state.load(Ordering::Acquire) == CANCELLED
  }
}

impl<T> StreamPublisher<T> for CancellableStream<T>
where
  T: Send + Sync + 'static,
{
  fn subscribe(&self, subscriber: Arc<dyn StreamSubscriber<T>>) {
    match self.state.compare_exchange(IDLE, SUBSCRIBED, Ordering::AcqRel, Ordering::Acquire) {
      | Ok(_) => {
        // The flag is shared with the forwarder so a cancellation racing
        // the subscription handshake is not lost.
        self.upstream.subscribe(Arc::new(TrackingForwarder {
          downstream: subscriber,
          active: self.active.clone(),
          cancel_requested: self.cancel_requested.clone(),
        }));
      },
      | Err(state) if state == CANCELLED => {
        // Cancelled before subscription; production never starts.
        subscriber.on_subscribe(Arc::new(InertSubscription));
        subscriber.on_complete();
      },
      | Err(_) => {
        // Already subscribed once; further subscriptions bypass tracking.
        self.upstream.subscribe(subscriber);
      },
    }
  }
}

struct TrackingForwarder<T> {
  downstream:       Arc<dyn StreamSubscriber<T>>,
  active:           Arc<Mutex<Option<Arc<dyn StreamSubscription>>>>,
  cancel_requested: Arc<AtomicBool>,
}

impl<T> StreamSubscriber<T> for TrackingForwarder<T>
where
  T: Send + Sync + 'static,
{
  fn on_subscribe(&self, subscription: Arc<dyn StreamSubscription>) {
    *lock_or_recover(&self.active) = Some(subscription.clone());
    self.downstream.on_subscribe(subscription.clone());
    if self.cancel_requested.load(Ordering::Acquire) {
      subscription.cancel();
    }
  }

  fn on_next(&self, item: T) {
    self.downstream.on_next(item);
  }

  fn on_complete(&self) {
    self.downstream.on_complete();
  }

  fn on_error(&self, failure: Failure) {
    self.downstream.on_error(failure);
  }
}

struct InertSubscription;

impl StreamSubscription for InertSubscription {
  fn request(&self, _count: u64) {}

  fn cancel(&self) {}
}
