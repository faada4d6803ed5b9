//! Completion handle implementation.

#[cfg(test)]
mod tests;

use std::sync::{Arc, Mutex};

use super::{lock_or_recover, CompletionRegistration, Failure};

type Listener<T> = Box<dyn FnOnce(Result<Option<T>, Failure>) + Send>;

struct CompletionCell<T> {
  outcome:   Option<Result<Option<T>, Failure>>,
  listeners: Vec<(u64, Listener<T>)>,
  next_id:   u64,
}

/// Promise-like handle settled at most once with a value-or-absent or a
/// failure.
///
/// The first settling call wins; later calls are silent no-ops. Callbacks
/// registered after settlement fire immediately; a registration can be
/// removed, which is the only cancellation the handle supports
/// (best-effort: it suppresses delivery, it does not stop the producer).
pub struct CompletionHandle<T> {
  inner: Arc<Mutex<CompletionCell<T>>>,
}

impl<T> Clone for CompletionHandle<T> {
  fn clone(&self) -> Self {
    Self { inner: self.inner.clone() }
  }
}

impl<T> CompletionHandle<T>
where
  T: Clone + Send + 'static,
{
  /// Creates an unsettled handle.
  #[must_use]
  pub fn new() -> Self {
    Self {
      inner: Arc::new(Mutex::new(CompletionCell { outcome: None, listeners: Vec::new(), next_id: 0 })),
    }
  }

  /// Settles the handle with an item, possibly absent.
  pub fn complete(&self, item: Option<T>) {
    self.settle(Ok(item));
  }

  /// Settles the handle with a failure.
  pub fn fail(&self, failure: Failure) {
    self.settle(Err(failure));
  }

  /// Returns `true` once the handle has been settled.
  #[must_use]
  pub fn is_settled(&self) -> bool {
    lock_or_recover(&self.inner).outcome.is_some()
  }

  /// Registers a callback invoked at most once with the outcome.
  ///
  /// Registering against a settled handle fires the callback immediately.
  pub fn register(&self, listener: impl FnOnce(Result<Option<T>, Failure>) + Send + 'static) -> CompletionRegistration {
    let listener: Listener<T> = Box::new(listener);
    let (id, fire) = {
      let mut cell = lock_or_recover(&self.inner);
      let id = cell.next_id;
      cell.next_id += 1;
      match cell.outcome.clone() {
        | Some(outcome) => (id, Some((listener, outcome))),
        | None => {
          cell.listeners.push((id, listener));
          (id, None)
        },
      }
    };
    if let Some((listener, outcome)) = fire {
      listener(outcome);
    }
    CompletionRegistration::new(id)
  }

  /// Removes a still-pending callback registration.
  pub fn unregister(&self, registration: CompletionRegistration) {
    lock_or_recover(&self.inner).listeners.retain(|(id, _)| *id != registration.id());
  }

  fn settle(&self, outcome: Result<Option<T>, Failure>) {
    let listeners = {
      let mut cell = lock_or_recover(&self.inner);
      if cell.outcome.is_some() {
        return;
      }
      cell.outcome = Some(outcome.clone());
      core::mem::take(&mut cell.listeners)
    };
    // Listeners run outside the lock so they may re-enter the handle.
    for (_, listener) in listeners {
      listener(outcome.clone());
    }
  }
}

impl<T> Default for CompletionHandle<T>
where
  T: Clone + Send + 'static,
{
  fn default() -> Self {
    Self::new()
  }
}
