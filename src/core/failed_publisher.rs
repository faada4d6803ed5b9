//! Failed publisher implementation.

use core::marker::PhantomData;
use std::sync::Arc;

use super::{Failure, StreamPublisher, StreamSubscriber, StreamSubscription};

/// Cold publisher failing immediately, emitting no items.
pub(crate) struct FailedPublisher<T> {
  failure: Failure,
  _marker: PhantomData<fn() -> T>,
}

impl<T> FailedPublisher<T> {
  pub(crate) fn new(failure: Failure) -> Self {
    Self { failure, _marker: PhantomData }
  }
}

impl<T> StreamPublisher<T> for FailedPublisher<T>
where
  T: Send + Sync + 'static,
{
  fn subscribe(&self, subscriber: Arc<dyn StreamSubscriber<T>>) {
    subscriber.on_subscribe(Arc::new(InertSubscription));
    subscriber.on_error(self.failure.clone());
  }
}

// Failure needs no demand; the subscription only satisfies signal order.
struct InertSubscription;

impl StreamSubscription for InertSubscription {
  fn request(&self, _count: u64) {}

  fn cancel(&self) {}
}
