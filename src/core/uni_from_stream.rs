//! Stream-to-Uni adapter.


use core::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use super::{
  lock_or_recover, Failure, StreamPublisher, StreamSubscriber, StreamSubscription, UniEmitter, UniProducer,
};

/// Adapts a backpressured multi-value source into a Uni.
///
/// One item is requested. The first item resolves the Uni; the upstream is
/// cancelled before delivery so it is never left active past resolution.
/// Zero-item completion resolves with an absent item.
pub(crate) struct UniFromStream<T> {
  source: Arc<dyn StreamPublisher<T>>,
}

impl<T> UniFromStream<T> {
  pub(crate) fn new(source: Arc<dyn StreamPublisher<T>>) -> Self {
    Self { source }
  }
}

impl<T> UniProducer<T> for UniFromStream<T>
where
  T: Send + Sync + 'static,
{
  fn produce(&self, emitter: UniEmitter<T>) {
    self.source.subscribe(Arc::new(FirstItemForwarder {
      emitter,
      upstream: Mutex::new(None),
      settled: AtomicBool::new(false),
    }));
  }
}

struct FirstItemForwarder<T> {
  emitter:  UniEmitter<T>,
  upstream: Mutex<Option<Arc<dyn StreamSubscription>>>,
  settled:  AtomicBool,
}

impl<T> StreamSubscriber<T> for FirstItemForwarder<T>
where
  T: Send + Sync + 'static,
{
  fn on_subscribe(&self, subscription: Arc<dyn StreamSubscription>) {
    *lock_or_recover(&self.upstream) = Some(subscription.clone());
    let hooked = subscription.clone();
    self.emitter.set_cancel_hook(move || hooked.cancel());
    // Cancellation between on_subscribe and here already ran the hook.
    if self.emitter.is_cancelled() {
      return;
    }
    subscription.request(1);
  }

  fn on_next(&self, item: T) {
    if self.settled.swap(true, Ordering::AcqRel) {
      return;
    }
    if let Some(upstream) = lock_or_recover(&self.upstream).take() {
      upstream.cancel();
    }
    self.emitter.item(Some(item));
  }

  fn on_complete(&self) {
    if self.settled.swap(true, Ordering::AcqRel) {
      return;
    }
    self.emitter.item(None);
  }

  fn on_error(&self, failure: Failure) {
    if self.settled.swap(true, Ordering::AcqRel) {
      return;
    }
    self.emitter.failure(failure);
  }
}
