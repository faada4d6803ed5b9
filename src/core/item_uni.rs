//! Item Uni producer.

use std::sync::Arc;

use super::{ItemSupplier, UniEmitter, UniProducer};

/// Uni resolving from a fallible supplier invoked per subscription.
pub(crate) struct ItemUni<T> {
  supplier: Arc<ItemSupplier<T>>,
}

impl<T> ItemUni<T> {
  pub(crate) fn new(supplier: Arc<ItemSupplier<T>>) -> Self {
    Self { supplier }
  }
}

impl<T> UniProducer<T> for ItemUni<T>
where
  T: Send + Sync + 'static,
{
  fn produce(&self, emitter: UniEmitter<T>) {
    match (self.supplier)() {
      | Ok(item) => emitter.item(item),
      | Err(failure) => emitter.failure(failure),
    }
  }
}
