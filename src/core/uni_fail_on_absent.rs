//! Absent-to-failure operator.

use std::sync::Arc;

use super::{Failure, FailureSupplier, Uni, UniEmitter, UniProducer, UniSubscriber, UniSubscription};

/// Replaces an absent upstream item with a supplied failure.
pub(crate) struct UniFailOnAbsent<T> {
  source:   Uni<T>,
  supplier: Arc<FailureSupplier>,
}

impl<T> UniFailOnAbsent<T> {
  pub(crate) fn new(source: Uni<T>, supplier: Arc<FailureSupplier>) -> Self {
    Self { source, supplier }
  }
}

impl<T> UniProducer<T> for UniFailOnAbsent<T>
where
  T: Send + Sync + 'static,
{
  fn produce(&self, emitter: UniEmitter<T>) {
    self.source.subscribe(AbsentGuard { emitter, supplier: self.supplier.clone() });
  }
}

struct AbsentGuard<T> {
  emitter:  UniEmitter<T>,
  supplier: Arc<FailureSupplier>,
}

impl<T> UniSubscriber<T> for AbsentGuard<T>
where
  T: Send + Sync + 'static,
{
  fn on_subscribe(&self, subscription: UniSubscription) {
    self.emitter.set_cancel_hook(move || subscription.cancel());
  }

  fn on_item(&self, item: Option<T>) {
    match item {
      | Some(value) => self.emitter.item(Some(value)),
      | None => self.emitter.failure((self.supplier)()),
    }
  }

  fn on_failure(&self, failure: Failure) {
    self.emitter.failure(failure);
  }
}
