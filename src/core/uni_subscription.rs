//! Uni subscription handle.

#[cfg(test)]
mod tests;

use std::sync::{Arc, Mutex};

use super::{lock_or_recover, SignalState};

pub(crate) type CancelHook = Box<dyn FnOnce() + Send>;

/// Cancellation handle owned by the consumer of one Uni subscription.
///
/// Cancellation is effective at most once: the first `cancel` that wins the
/// race against resolution runs the producer-supplied hook and moves the
/// state token to its confirmed-cancelled resting state. Every later call,
/// and any call losing the race, is a no-op.
#[derive(Clone)]
pub struct UniSubscription {
  state: Arc<SignalState>,
  hook:  Arc<Mutex<Option<CancelHook>>>,
}

impl UniSubscription {
  pub(crate) fn new(state: Arc<SignalState>, hook: Arc<Mutex<Option<CancelHook>>>) -> Self {
    Self { state, hook }
  }

  /// Requests cancellation of this subscription.
  pub fn cancel(&self) {
    if self.state.try_begin_cancel() {
      let hook = lock_or_recover(&self.hook).take();
      if let Some(hook) = hook {
        hook();
      }
      self.state.confirm_cancel();
    }
  }

  /// Returns `true` once cancellation has been requested or confirmed.
  #[must_use]
  pub fn is_cancelled(&self) -> bool {
    self.state.is_cancelled()
  }
}
