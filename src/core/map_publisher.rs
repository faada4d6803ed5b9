//! Map publisher implementation.

use std::sync::Arc;

use super::{Failure, StreamPublisher, StreamSubscriber, StreamSubscription};

/// Per-item transformation carried by map stages.
pub type StreamMapper<T> = dyn Fn(T) -> T + Send + Sync;

/// Publisher applying a transformation to each upstream item.
pub(crate) struct MapPublisher<T> {
  upstream: Arc<dyn StreamPublisher<T>>,
  mapper:   Arc<StreamMapper<T>>,
}

impl<T> MapPublisher<T> {
  pub(crate) fn new(upstream: Arc<dyn StreamPublisher<T>>, mapper: Arc<StreamMapper<T>>) -> Self {
    Self { upstream, mapper }
  }
}

impl<T> StreamPublisher<T> for MapPublisher<T>
where
  T: Send + Sync + 'static,
{
  fn subscribe(&self, subscriber: Arc<dyn StreamSubscriber<T>>) {
    self.upstream.subscribe(Arc::new(MapForwarder { downstream: subscriber, mapper: self.mapper.clone() }));
  }
}

struct MapForwarder<T> {
  downstream: Arc<dyn StreamSubscriber<T>>,
  mapper:     Arc<StreamMapper<T>>,
}

impl<T> StreamSubscriber<T> for MapForwarder<T>
where
  T: Send + Sync + 'static,
{
  fn on_subscribe(&self, subscription: Arc<dyn StreamSubscription>) {
    self.downstream.on_subscribe(subscription);
  }

  fn on_next(&self, item: T) {
    self.downstream.on_next((self.mapper)(item));
  }

  fn on_complete(&self) {
    self.downstream.on_complete();
  }

  fn on_error(&self, failure: Failure) {
    self.downstream.on_error(failure);
  }
}
