//! Uni probe test support.

use std::fmt::Debug;
use std::sync::{Condvar, Mutex, PoisonError};
use std::time::Duration;

use super::super::{lock_or_recover, Failure, UniSubscriber, UniSubscription};

const WAIT_LIMIT: Duration = Duration::from_secs(5);

struct ProbeState<T> {
  subscription: Option<UniSubscription>,
  item:         Option<Option<T>>,
  failure:      Option<Failure>,
}

/// Recording subscriber for one Uni subscription.
///
/// Wrap it in an `Arc`, subscribe the clone, and assert on the original.
/// Terminal assertions block until a terminal signal arrives or a fixed
/// wait limit expires.
pub struct TestUniProbe<T> {
  state:     Mutex<ProbeState<T>>,
  signalled: Condvar,
}

impl<T> TestUniProbe<T> {
  #[must_use]
  pub fn new() -> Self {
    Self {
      state:     Mutex::new(ProbeState { subscription: None, item: None, failure: None }),
      signalled: Condvar::new(),
    }
  }

  /// Panics unless `on_subscribe` has been delivered.
  pub fn assert_subscribed(&self) {
    assert!(lock_or_recover(&self.state).subscription.is_some(), "probe was never subscribed");
  }

  /// Cancels the recorded subscription.
  ///
  /// Panics unless `on_subscribe` has been delivered.
  pub fn cancel(&self) {
    let subscription = lock_or_recover(&self.state).subscription.clone();
    match subscription {
      | Some(subscription) => subscription.cancel(),
      | None => panic!("probe was never subscribed"),
    }
  }

  /// Returns `true` once a terminal signal has been recorded.
  #[must_use]
  pub fn is_terminated(&self) -> bool {
    let state = lock_or_recover(&self.state);
    state.item.is_some() || state.failure.is_some()
  }

  /// Blocks until a terminal signal arrives.
  pub fn await_terminal(&self) {
    let mut state = lock_or_recover(&self.state);
    let deadline = std::time::Instant::now() + WAIT_LIMIT;
    while state.item.is_none() && state.failure.is_none() {
      let Some(remaining) = deadline.checked_duration_since(std::time::Instant::now()) else {
        panic!("no terminal signal within {WAIT_LIMIT:?}");
      };
      let (guard, _) = self
        .signalled
        .wait_timeout(state, remaining)
        .unwrap_or_else(PoisonError::into_inner);
      state = guard;
    }
  }

  /// Panics unless no terminal signal has been recorded.
  pub fn assert_not_terminated(&self) {
    let state = lock_or_recover(&self.state);
    assert!(state.item.is_none(), "unexpected item signal");
    assert!(state.failure.is_none(), "unexpected failure signal");
  }

  /// Panics unless the subscription resolved with the absent item.
  pub fn assert_absent(&self)
  where
    T: Debug, {
    self.await_terminal();
    let state = lock_or_recover(&self.state);
    if let Some(failure) = &state.failure {
      panic!("expected absent item, got failure: {failure}");
    }
    match &state.item {
      | Some(None) => {},
      | Some(Some(item)) => panic!("expected absent item, got {item:?}"),
      | None => unreachable!(),
    }
  }

  /// Panics unless the subscription resolved with the given item.
  pub fn assert_item(&self, expected: &T)
  where
    T: PartialEq + Debug, {
    self.await_terminal();
    let state = lock_or_recover(&self.state);
    if let Some(failure) = &state.failure {
      panic!("expected item {expected:?}, got failure: {failure}");
    }
    match &state.item {
      | Some(Some(item)) => assert_eq!(item, expected),
      | Some(None) => panic!("expected item {expected:?}, got absent"),
      | None => unreachable!(),
    }
  }

  /// Panics unless the subscription failed with the given message.
  pub fn assert_failure_message(&self, expected: &str) {
    self.await_terminal();
    let state = lock_or_recover(&self.state);
    match &state.failure {
      | Some(failure) => assert_eq!(failure.message(), expected),
      | None => panic!("expected failure {expected:?}, got item"),
    }
  }
}

impl<T> Default for TestUniProbe<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T> UniSubscriber<T> for TestUniProbe<T>
where
  T: Send + Sync,
{
  fn on_subscribe(&self, subscription: UniSubscription) {
    lock_or_recover(&self.state).subscription = Some(subscription);
    self.signalled.notify_all();
  }

  fn on_item(&self, item: Option<T>) {
    lock_or_recover(&self.state).item = Some(item);
    self.signalled.notify_all();
  }

  fn on_failure(&self, failure: Failure) {
    lock_or_recover(&self.state).failure = Some(failure);
    self.signalled.notify_all();
  }
}
