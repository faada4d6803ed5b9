//! Emit publisher implementation.

#[cfg(test)]
mod tests;

use core::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use super::{Demand, Failure, StreamError, StreamPublisher, StreamSubscriber, StreamSubscription};

/// Cold publisher replaying a fixed item list per subscription.
pub(crate) struct EmitPublisher<T> {
  items: Vec<T>,
}

impl<T> EmitPublisher<T> {
  pub(crate) fn new(items: Vec<T>) -> Self {
    Self { items }
  }
}

impl<T> StreamPublisher<T> for EmitPublisher<T>
where
  T: Clone + Send + Sync + 'static,
{
  fn subscribe(&self, subscriber: Arc<dyn StreamSubscriber<T>>) {
    let subscription = Arc::new(EmitSubscription {
      subscriber: subscriber.clone(),
      items: self.items.clone(),
      index: AtomicUsize::new(0),
      demand: Demand::new(),
      cancelled: AtomicBool::new(false),
      completed: AtomicBool::new(false),
      draining: AtomicBool::new(false),
    });
    subscriber.on_subscribe(subscription);
  }
}

struct EmitSubscription<T> {
  subscriber: Arc<dyn StreamSubscriber<T>>,
  items:      Vec<T>,
  index:      AtomicUsize,
  demand:     Demand,
  cancelled:  AtomicBool,
  completed:  AtomicBool,
  draining:   AtomicBool,
}

impl<T> EmitSubscription<T>
where
  T: Clone + Send + Sync + 'static,
{
  fn drain(&self) {
    if self.draining.swap(true, Ordering::AcqRel) {
      // An active drain (possibly a reentrant request) picks up the
      // added demand.
      return;
    }
    loop {
      while !self.cancelled.load(Ordering::Acquire) {
        let index = self.index.load(Ordering::Acquire);
        if index >= self.items.len() {
          break;
        }
        if !self.demand.try_consume_one() {
          break;
        }
        self.index.store(index + 1, Ordering::Release);
        self.subscriber.on_next(self.items[index].clone());
      }
      if !self.cancelled.load(Ordering::Acquire)
        && self.index.load(Ordering::Acquire) >= self.items.len()
        && !self.completed.swap(true, Ordering::AcqRel)
      {
        self.subscriber.on_complete();
      }
      self.draining.store(false, Ordering::Release);
      let exhausted = self.cancelled.load(Ordering::Acquire)
        || self.index.load(Ordering::Acquire) >= self.items.len()
        || self.demand.outstanding() == 0;
      if exhausted {
        return;
      }
      // Demand arrived while releasing the flag; try to pick it up.
      if self.draining.swap(true, Ordering::AcqRel) {
        return;
      }
    }
  }
}

impl<T> StreamSubscription for EmitSubscription<T>
where
  T: Clone + Send + Sync + 'static,
{
  fn request(&self, count: u64) {
    if count == 0 {
      self.cancelled.store(true, Ordering::Release);
      if !self.completed.swap(true, Ordering::AcqRel) {
        self.subscriber.on_error(Failure::from(StreamError::InvalidDemand));
      }
      return;
    }
    self.demand.add(count);
    self.drain();
  }

  fn cancel(&self) {
    self.cancelled.store(true, Ordering::Release);
  }
}
