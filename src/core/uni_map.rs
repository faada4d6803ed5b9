//! Uni map operator.


use std::sync::Arc;

use super::{Failure, Uni, UniEmitter, UniProducer, UniSubscriber, UniSubscription};

pub(crate) type Mapper<In, Out> = dyn Fn(Option<In>) -> Result<Option<Out>, Failure> + Send + Sync;

/// Map operator over the upstream item.
pub(crate) struct UniMap<In, Out> {
  source: Uni<In>,
  mapper: Arc<Mapper<In, Out>>,
}

impl<In, Out> UniMap<In, Out> {
  pub(crate) fn new(source: Uni<In>, mapper: Arc<Mapper<In, Out>>) -> Self {
    Self { source, mapper }
  }
}

impl<In, Out> UniProducer<Out> for UniMap<In, Out>
where
  In: Send + Sync + 'static,
  Out: Send + Sync + 'static,
{
  fn produce(&self, emitter: UniEmitter<Out>) {
    self.source.subscribe(MapForwarder { emitter, mapper: self.mapper.clone() });
  }
}

struct MapForwarder<In, Out> {
  emitter: UniEmitter<Out>,
  mapper:  Arc<Mapper<In, Out>>,
}

impl<In, Out> UniSubscriber<In> for MapForwarder<In, Out>
where
  In: Send + Sync + 'static,
  Out: Send + Sync + 'static,
{
  fn on_subscribe(&self, subscription: UniSubscription) {
    self.emitter.set_cancel_hook(move || subscription.cancel());
  }

  fn on_item(&self, item: Option<In>) {
    match (self.mapper)(item) {
      | Ok(mapped) => self.emitter.item(mapped),
      | Err(failure) => self.emitter.failure(failure),
    }
  }

  // The mapper is never invoked on the failure path.
  fn on_failure(&self, failure: Failure) {
    self.emitter.failure(failure);
  }
}
