//! Concatenating publisher implementation.

#[cfg(test)]
mod tests;

use core::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use super::{
  lock_or_recover, CancellableStream, Demand, Failure, StreamError, StreamPublisher, StreamSubscriber,
  StreamSubscription,
};

/// Publisher emitting every item of `first`, then every item of `second`.
///
/// The second pipeline is only subscribed after the first completes
/// successfully. On either pipeline's failure the other, if not yet
/// subscribed, is never started. Downstream signals are serialized through
/// an emission gate because the two pipelines may emit from independent
/// threads.
pub(crate) struct ConcatPublisher<T> {
  first:  Arc<dyn StreamPublisher<T>>,
  second: Arc<dyn StreamPublisher<T>>,
}

impl<T> ConcatPublisher<T> {
  pub(crate) fn new(first: Arc<dyn StreamPublisher<T>>, second: Arc<dyn StreamPublisher<T>>) -> Self {
    Self { first, second }
  }
}

impl<T> StreamPublisher<T> for ConcatPublisher<T>
where
  T: Send + Sync + 'static,
{
  fn subscribe(&self, subscriber: Arc<dyn StreamSubscriber<T>>) {
    let inner = Arc::new(ConcatInner {
      downstream: subscriber,
      second: CancellableStream::new(self.second.clone()),
      gate: Mutex::new(()),
      current: Mutex::new(None),
      demand: Demand::new(),
      cancelled: AtomicBool::new(false),
      terminated: AtomicBool::new(false),
    });
    inner.downstream.on_subscribe(Arc::new(ConcatSubscription { inner: inner.clone() }));
    if inner.cancelled.load(Ordering::Acquire) {
      return;
    }
    self.first.subscribe(Arc::new(FirstForwarder { inner }));
  }
}

struct ConcatInner<T> {
  downstream: Arc<dyn StreamSubscriber<T>>,
  second:     CancellableStream<T>,
  gate:       Mutex<()>,
  current:    Mutex<Option<Arc<dyn StreamSubscription>>>,
  demand:     Demand,
  cancelled:  AtomicBool,
  terminated: AtomicBool,
}

impl<T> ConcatInner<T>
where
  T: Send + Sync + 'static,
{
  // An item past downstream demand is an upstream protocol violation; it
  // is dropped rather than forwarded.
  fn emit(&self, item: T) {
    if !self.demand.try_consume_one() {
      return;
    }
    let _gate = lock_or_recover(&self.gate);
    if !self.cancelled.load(Ordering::Acquire) && !self.terminated.load(Ordering::Acquire) {
      self.downstream.on_next(item);
    }
  }

  // The current-slot lock decides which side forwards each demand unit:
  // units added before the slot is set are covered by the outstanding
  // snapshot taken here, units added after are forwarded by `request`.
  // Forwarding happens outside the lock since it may emit synchronously.
  fn attach(&self, subscription: Arc<dyn StreamSubscription>) {
    let pending = {
      let mut current = lock_or_recover(&self.current);
      *current = Some(subscription.clone());
      self.demand.outstanding()
    };
    if self.cancelled.load(Ordering::Acquire) {
      subscription.cancel();
      return;
    }
    if pending > 0 {
      subscription.request(pending);
    }
  }

  fn terminate_with(&self, failure: Failure) {
    if !self.terminated.swap(true, Ordering::AcqRel) {
      let _gate = lock_or_recover(&self.gate);
      self.downstream.on_error(failure);
    }
  }
}

struct ConcatSubscription<T> {
  inner: Arc<ConcatInner<T>>,
}

impl<T> StreamSubscription for ConcatSubscription<T>
where
  T: Send + Sync + 'static,
{
  fn request(&self, count: u64) {
    if count == 0 {
      self.inner.cancelled.store(true, Ordering::Release);
      let current = lock_or_recover(&self.inner.current).take();
      if let Some(subscription) = current {
        subscription.cancel();
      }
      self.inner.second.cancel_if_not_subscribed();
      self.inner.terminate_with(Failure::from(StreamError::InvalidDemand));
      return;
    }
    let current = {
      let slot = lock_or_recover(&self.inner.current);
      self.inner.demand.add(count);
      slot.clone()
    };
    if let Some(subscription) = current {
      subscription.request(count);
    }
  }

  fn cancel(&self) {
    self.inner.cancelled.store(true, Ordering::Release);
    let current = lock_or_recover(&self.inner.current).take();
    if let Some(subscription) = current {
      subscription.cancel();
    }
    self.inner.second.cancel_if_not_subscribed();
  }
}

struct FirstForwarder<T> {
  inner: Arc<ConcatInner<T>>,
}

impl<T> StreamSubscriber<T> for FirstForwarder<T>
where
  T: Send + Sync + 'static,
{
  fn on_subscribe(&self, subscription: Arc<dyn StreamSubscription>) {
    self.inner.attach(subscription);
  }

  fn on_next(&self, item: T) {
    self.inner.emit(item);
  }

  fn on_complete(&self) {
    // Drain barrier: any in-flight first-pipeline emission holds the gate,
    // so the switch cannot race its last signal.
    drop(lock_or_recover(&self.inner.gate));
    lock_or_recover(&self.inner.current).take();
    if self.inner.cancelled.load(Ordering::Acquire) {
      self.inner.second.cancel_if_not_subscribed();
      return;
    }
    self.inner.second.subscribe(Arc::new(SecondForwarder { inner: self.inner.clone() }));
  }

  fn on_error(&self, failure: Failure) {
    lock_or_recover(&self.inner.current).take();
    self.inner.terminate_with(failure);
    // The second pipeline was never subscribed; it must never start.
    self.inner.second.cancel_if_not_subscribed();
  }
}

struct SecondForwarder<T> {
  inner: Arc<ConcatInner<T>>,
}

impl<T> StreamSubscriber<T> for SecondForwarder<T>
where
  T: Send + Sync + 'static,
{
  fn on_subscribe(&self, subscription: Arc<dyn StreamSubscription>) {
    self.inner.attach(subscription);
  }

  fn on_next(&self, item: T) {
    self.inner.emit(item);
  }

  fn on_complete(&self) {
    if !self.inner.terminated.swap(true, Ordering::AcqRel) && !self.inner.cancelled.load(Ordering::Acquire) {
      let _gate = lock_or_recover(&self.inner.gate);
      self.inner.downstream.on_complete();
    }
  }

  fn on_error(&self, failure: Failure) {
    self.inner.terminate_with(failure);
  }
}
