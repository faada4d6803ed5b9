//! Publish-on operator.

#[cfg(test)]
mod tests;

use std::sync::Arc;

use super::{Executor, Failure, Uni, UniEmitter, UniProducer, UniSubscriber, UniSubscription};

/// Re-emits the upstream terminal signal on a caller-supplied executor.
///
/// Cancellation is forwarded upstream directly, without redirection.
pub(crate) struct UniPublishOn<T> {
  source:   Uni<T>,
  executor: Arc<dyn Executor>,
}

impl<T> UniPublishOn<T> {
  pub(crate) fn new(source: Uni<T>, executor: Arc<dyn Executor>) -> Self {
    Self { source, executor }
  }
}

impl<T> UniProducer<T> for UniPublishOn<T>
where
  T: Send + Sync + 'static,
{
  fn produce(&self, emitter: UniEmitter<T>) {
    self.source.subscribe(RedirectForwarder { emitter, executor: self.executor.clone() });
  }
}

struct RedirectForwarder<T> {
  emitter:  UniEmitter<T>,
  executor: Arc<dyn Executor>,
}

impl<T> UniSubscriber<T> for RedirectForwarder<T>
where
  T: Send + Sync + 'static,
{
  fn on_subscribe(&self, subscription: UniSubscription) {
    self.emitter.set_cancel_hook(move || subscription.cancel());
  }

  fn on_item(&self, item: Option<T>) {
    let emitter = self.emitter.clone();
    self.executor.execute(Box::new(move || emitter.item(item)));
  }

  fn on_failure(&self, failure: Failure) {
    let emitter = self.emitter.clone();
    self.executor.execute(Box::new(move || emitter.failure(failure)));
  }
}
