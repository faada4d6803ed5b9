//! Uni primitive and operator surface.


use std::sync::Arc;

use super::{
  CompletionHandle, CompletionSource, Executor, FailedUni, Failure, ItemUni, StreamPublisher, UniAbsentGroup,
  UniEmitter, UniFromCompletion, UniFromStream, UniMap, UniPublishOn, UniSubscriber,
};

/// Producer side of a Uni; one `produce` call per subscription.
pub(crate) trait UniProducer<T>: Send + Sync {
  fn produce(&self, emitter: UniEmitter<T>);
}

/// Cold, single-resolution asynchronous value.
///
/// A `Uni` is an immutable description; subscribing re-executes the
/// underlying computation, and each subscription independently receives
/// `on_subscribe` followed by at most one of `on_item` / `on_failure`.
/// A Uni that never resolves is valid; cancellation is the only way to
/// stop waiting for it.
pub struct Uni<T> {
  producer: Arc<dyn UniProducer<T>>,
}

impl<T> Clone for Uni<T> {
  fn clone(&self) -> Self {
    Self { producer: self.producer.clone() }
  }
}

impl<T> Uni<T>
where
  T: Send + Sync + 'static,
{
  pub(crate) fn from_producer(producer: Arc<dyn UniProducer<T>>) -> Self {
    Self { producer }
  }

  /// Creates a Uni resolving with the given item.
  pub fn item(value: T) -> Self
  where
    T: Clone, {
    Self::item_with(move || Ok(Some(value.clone())))
  }

  /// Creates a Uni resolving with an absent item.
  #[must_use]
  pub fn absent() -> Self {
    Self::item_with(|| Ok(None))
  }

  /// Creates a Uni resolving from a supplier invoked per subscription.
  ///
  /// The supplier's error is delivered as the failure signal.
  pub fn item_with(supplier: impl Fn() -> Result<Option<T>, Failure> + Send + Sync + 'static) -> Self {
    Self::from_producer(Arc::new(ItemUni::new(Arc::new(supplier))))
  }

  /// Creates a Uni failing with the given failure.
  #[must_use]
  pub fn failed(failure: Failure) -> Self {
    Self::failed_with(move || failure.clone())
  }

  /// Creates a Uni failing with a failure produced per subscription.
  pub fn failed_with(supplier: impl Fn() -> Failure + Send + Sync + 'static) -> Self {
    Self::from_producer(Arc::new(FailedUni::new(Arc::new(supplier))))
  }

  /// Adapts a completion handle into a Uni.
  ///
  /// Each subscription registers its own callback on the handle and
  /// unregisters it on cancellation.
  #[must_use]
  pub fn from_completion(handle: &CompletionHandle<T>) -> Self
  where
    T: Clone, {
    Self::from_producer(Arc::new(UniFromCompletion::new(CompletionSource::Eager(handle.clone()))))
  }

  /// Adapts a lazily constructed completion handle into a Uni.
  ///
  /// The supplier runs at subscription time, never at construction time;
  /// its error is delivered as the failure signal.
  pub fn from_completion_with(
    supplier: impl Fn() -> Result<CompletionHandle<T>, Failure> + Send + Sync + 'static,
  ) -> Self
  where
    T: Clone, {
    Self::from_producer(Arc::new(UniFromCompletion::new(CompletionSource::Deferred(Arc::new(supplier)))))
  }

  /// Adapts a backpressured multi-value source into a Uni.
  ///
  /// Exactly one item is requested; the first item resolves the Uni and
  /// the upstream source is cancelled. Zero-item completion resolves with
  /// an absent item.
  #[must_use]
  pub fn from_stream(source: Arc<dyn StreamPublisher<T>>) -> Self {
    Self::from_producer(Arc::new(UniFromStream::new(source)))
  }

  /// Subscribes the given consumer, starting the computation.
  pub fn subscribe(&self, subscriber: impl UniSubscriber<T> + 'static) {
    let emitter = UniEmitter::new(Box::new(subscriber));
    emitter.send_subscription();
    self.producer.produce(emitter);
  }

  /// Transforms the resolved item.
  ///
  /// The mapper is never invoked when upstream fails; its error becomes
  /// the new failure, and an absent result is a valid item.
  pub fn map<O>(&self, mapper: impl Fn(Option<T>) -> Result<Option<O>, Failure> + Send + Sync + 'static) -> Uni<O>
  where
    O: Send + Sync + 'static, {
    Uni::from_producer(Arc::new(UniMap::new(self.clone(), Arc::new(mapper))))
  }

  /// Enters the absent-item handling group.
  #[must_use]
  pub fn on_absent(&self) -> UniAbsentGroup<T> {
    UniAbsentGroup::new(self.clone())
  }

  /// Re-emits the terminal signal on the given execution context.
  #[must_use]
  pub fn publish_on(&self, executor: Arc<dyn Executor>) -> Self {
    Self::from_producer(Arc::new(UniPublishOn::new(self.clone(), executor)))
  }
}
