//! Failed Uni producer.

use std::sync::Arc;

use super::{FailureSupplier, UniEmitter, UniProducer};

/// Uni failing with a supplier-produced failure per subscription.
///
/// The subscription handle is delivered before the failure, so the caller
/// holds a cancellation handle even on this fast-fail path.
pub(crate) struct FailedUni {
  supplier: Arc<FailureSupplier>,
}

impl FailedUni {
  pub(crate) fn new(supplier: Arc<FailureSupplier>) -> Self {
    Self { supplier }
  }
}

impl<T> UniProducer<T> for FailedUni
where
  T: Send + Sync + 'static,
{
  fn produce(&self, emitter: UniEmitter<T>) {
    emitter.failure((self.supplier)());
  }
}
