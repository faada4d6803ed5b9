//! Completion-handle adapter.

#[cfg(test)]
mod tests;

use std::sync::Arc;

use super::{CompletionHandle, Failure, UniEmitter, UniProducer};

pub(crate) type HandleSupplier<T> = dyn Fn() -> Result<CompletionHandle<T>, Failure> + Send + Sync;

/// Source of the completion handle adapted by [`UniFromCompletion`].
pub(crate) enum CompletionSource<T> {
  /// Handle supplied at construction time.
  Eager(CompletionHandle<T>),
  /// Handle constructed at subscription time.
  Deferred(Arc<HandleSupplier<T>>),
}

/// Adapts a completion handle into a Uni.
///
/// Each subscription registers its own callback and removes it again on
/// cancellation, so no callback outlives its subscription.
pub(crate) struct UniFromCompletion<T> {
  source: CompletionSource<T>,
}

impl<T> UniFromCompletion<T> {
  pub(crate) fn new(source: CompletionSource<T>) -> Self {
    Self { source }
  }
}

impl<T> UniProducer<T> for UniFromCompletion<T>
where
  T: Clone + Send + Sync + 'static,
{
  fn produce(&self, emitter: UniEmitter<T>) {
    let handle = match &self.source {
      | CompletionSource::Eager(handle) => handle.clone(),
      | CompletionSource::Deferred(supplier) => match supplier() {
        | Ok(handle) => handle,
        | Err(failure) => {
          emitter.failure(failure);
          return;
        },
      },
    };
    let registration = handle.register({
      let emitter = emitter.clone();
      move |outcome| match outcome {
        | Ok(item) => emitter.item(item),
        | Err(failure) => emitter.failure(failure),
      }
    });
    let hook_handle = handle.clone();
    emitter.set_cancel_hook(move || hook_handle.unregister(registration));
  }
}
