//! Uni emitter implementation.


use std::sync::{Arc, Mutex};

use super::uni_subscription::CancelHook;
use super::{lock_or_recover, Failure, SignalState, UniSubscriber, UniSubscription};

/// Exactly-once delivery guard for one Uni subscription.
///
/// Every producer path funnels its terminal signal through the same state
/// token, so concurrent resolutions and cancellation races collapse to a
/// single delivered signal. Losing the race is silent.
pub(crate) struct UniEmitter<T> {
  inner: Arc<EmitterInner<T>>,
}

struct EmitterInner<T> {
  subscriber: Box<dyn UniSubscriber<T>>,
  state:      Arc<SignalState>,
  hook:       Arc<Mutex<Option<CancelHook>>>,
}

impl<T> Clone for UniEmitter<T> {
  fn clone(&self) -> Self {
    Self { inner: self.inner.clone() }
  }
}

impl<T> UniEmitter<T> {
  pub(crate) fn new(subscriber: Box<dyn UniSubscriber<T>>) -> Self {
    Self {
      inner: Arc::new(EmitterInner {
        subscriber,
        state: Arc::new(SignalState::new()),
        hook: Arc::new(Mutex::new(None)),
      }),
    }
  }

  /// Delivers `on_subscribe`. Must be called exactly once, first.
  pub(crate) fn send_subscription(&self) {
    let subscription = UniSubscription::new(self.inner.state.clone(), self.inner.hook.clone());
    self.inner.subscriber.on_subscribe(subscription);
  }

  /// Installs the hook run when cancellation wins the race.
  ///
  /// A hook installed after cancellation runs immediately; one installed
  /// after resolution is dropped, since the registration it would release
  /// has already been consumed.
  pub(crate) fn set_cancel_hook(&self, hook: impl FnOnce() + Send + 'static) {
    let mut slot: Option<CancelHook> = Some(Box::new(hook));
    {
      let mut cell = lock_or_recover(&self.inner.hook);
      if self.inner.state.is_pending() {
        *cell = slot.take();
      }
    }
    if let Some(hook) = slot {
      if self.inner.state.is_cancelled() {
        hook();
      }
    }
  }

  /// Attempts to deliver the item signal.
  pub(crate) fn item(&self, item: Option<T>) {
    if self.inner.state.try_resolve() {
      self.release_hook();
      self.inner.subscriber.on_item(item);
    }
  }

  /// Attempts to deliver the failure signal.
  pub(crate) fn failure(&self, failure: Failure) {
    if self.inner.state.try_resolve() {
      self.release_hook();
      self.inner.subscriber.on_failure(failure);
    }
  }

  pub(crate) fn is_cancelled(&self) -> bool {
    self.inner.state.is_cancelled()
  }

  // Registrations held by the hook are released at terminal delivery.
  fn release_hook(&self) {
    lock_or_recover(&self.inner.hook).take();
  }
}
