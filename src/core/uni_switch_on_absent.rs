//! Absent-to-alternative operator.

use std::sync::Arc;

use super::{Failure, Uni, UniEmitter, UniProducer, UniSubscriber, UniSubscription};

pub(crate) type AlternativeSupplier<T> = dyn Fn() -> Result<Uni<T>, Failure> + Send + Sync;

/// Switches to an alternative Uni when the upstream item is absent.
pub(crate) struct UniSwitchOnAbsent<T> {
  source:   Uni<T>,
  supplier: Arc<AlternativeSupplier<T>>,
}

impl<T> UniSwitchOnAbsent<T> {
  pub(crate) fn new(source: Uni<T>, supplier: Arc<AlternativeSupplier<T>>) -> Self {
    Self { source, supplier }
  }
}

impl<T> UniProducer<T> for UniSwitchOnAbsent<T>
where
  T: Send + Sync + 'static,
{
  fn produce(&self, emitter: UniEmitter<T>) {
    self.source.subscribe(SwitchGuard { emitter, supplier: self.supplier.clone() });
  }
}

struct SwitchGuard<T> {
  emitter:  UniEmitter<T>,
  supplier: Arc<AlternativeSupplier<T>>,
}

impl<T> UniSubscriber<T> for SwitchGuard<T>
where
  T: Send + Sync + 'static,
{
  fn on_subscribe(&self, subscription: UniSubscription) {
    self.emitter.set_cancel_hook(move || subscription.cancel());
  }

  fn on_item(&self, item: Option<T>) {
    match item {
      | Some(value) => self.emitter.item(Some(value)),
      | None => match (self.supplier)() {
        | Ok(alternative) => alternative.subscribe(Passthrough { emitter: self.emitter.clone() }),
        | Err(failure) => self.emitter.failure(failure),
      },
    }
  }

  fn on_failure(&self, failure: Failure) {
    self.emitter.failure(failure);
  }
}

// Forwards the alternative's signals; rebinds cancellation to the
// alternative's subscription.
struct Passthrough<T> {
  emitter: UniEmitter<T>,
}

impl<T> UniSubscriber<T> for Passthrough<T>
where
  T: Send + Sync + 'static,
{
  fn on_subscribe(&self, subscription: UniSubscription) {
    self.emitter.set_cancel_hook(move || subscription.cancel());
  }

  fn on_item(&self, item: Option<T>) {
    self.emitter.item(item);
  }

  fn on_failure(&self, failure: Failure) {
    self.emitter.failure(failure);
  }
}
