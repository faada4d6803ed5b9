//! Demand counter implementation.


use core::sync::atomic::{AtomicU64, Ordering};

/// Outstanding-demand counter shared across producer threads.
///
/// Saturates to `u64::MAX`, which is treated as unbounded demand and is
/// never decremented.
#[derive(Debug)]
pub struct Demand {
  outstanding: AtomicU64,
}

impl Demand {
  /// Creates a counter with zero demand.
  #[must_use]
  pub const fn new() -> Self {
    Self { outstanding: AtomicU64::new(0) }
  }

  /// Adds demand, saturating to unbounded.
  pub fn add(&self, count: u64) -> u64 {
    let mut current = self.outstanding.load(Ordering::Acquire);
    loop {
      let next = current.saturating_add(count);
      match self
        .outstanding
        .compare_exchange_weak(current, next, Ordering::AcqRel, Ordering::Acquire)
      {
        | Ok(_) => return next,
        | Err(observed) => current = observed,
      }
    }
  }

  /// Consumes one unit of demand when available.
  #[must_use]
  pub fn try_consume_one(&self) -> bool {
    let mut current = self.outstanding.load(Ordering::Acquire);
    loop {
      if current == u64::MAX {
        return true;
      }
      if current == 0 {
        return false;
      }
      match self
        .outstanding
        .compare_exchange_weak(current, current - 1, Ordering::AcqRel, Ordering::Acquire)
      {
        | Ok(_) => return true,
        | Err(observed) => current = observed,
      }
    }
  }

  /// Returns the current outstanding demand.
  #[must_use]
  pub fn outstanding(&self) -> u64 {
    self.outstanding.load(Ordering::Acquire)
  }
}

impl Default for Demand {
  fn default() -> Self {
    Self::new()
  }
}
