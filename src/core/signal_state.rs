//! Subscription signal state.


use core::sync::atomic::{AtomicU8, Ordering};

const PENDING: u8 = 0;
const RESOLVED: u8 = 1;
const CANCEL_REQUESTED: u8 = 2;
const CANCELLED: u8 = 3;

/// Per-subscription terminal state token.
///
/// The only transitions are out of `PENDING`, decided by a single
/// compare-and-set. The losing side of a (resolve, cancel) race observes a
/// failed swap and must treat it as a no-op.
#[derive(Debug)]
pub(crate) struct SignalState {
  value: AtomicU8,
}

impl SignalState {
  pub(crate) const fn new() -> Self {
    Self { value: AtomicU8::new(PENDING) }
  }

  /// Attempts the pending-to-resolved transition.
  pub(crate) fn try_resolve(&self) -> bool {
    self
      .value
      .compare_exchange(PENDING, RESOLVED, Ordering::AcqRel, Ordering::Acquire)
      .is_ok()
  }

  /// Attempts the pending-to-cancel-requested transition.
  pub(crate) fn try_begin_cancel(&self) -> bool {
    self
      .value
      .compare_exchange(PENDING, CANCEL_REQUESTED, Ordering::AcqRel, Ordering::Acquire)
      .is_ok()
  }

  /// Confirms a previously requested cancellation.
  pub(crate) fn confirm_cancel(&self) {
    let _ = self
      .value
      .compare_exchange(CANCEL_REQUESTED, CANCELLED, Ordering::AcqRel, Ordering::Acquire);
  }

  pub(crate) fn is_pending(&self) -> bool {
    self.value.load(Ordering::Acquire) == PENDING
  }

  pub(crate) fn is_resolved(&self) -> bool {
    self.value.load(Ordering::Acquire) == RESOLVED
  }

  pub(crate) fn is_cancelled(&self) -> bool {
    self.value.load(Ordering::Acquire) >= CANCEL_REQUESTED
  }
}
