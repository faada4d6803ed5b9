//! Stream probe test support.

use std::fmt::Debug;
use std::sync::{Arc, Condvar, Mutex, PoisonError};
use std::time::Duration;

use super::super::{lock_or_recover, Failure, StreamSubscriber, StreamSubscription};

const WAIT_LIMIT: Duration = Duration::from_secs(5);

struct ProbeState<T> {
  subscription: Option<Arc<dyn StreamSubscription>>,
  items:        Vec<T>,
  completed:    bool,
  failure:      Option<Failure>,
}

/// Recording subscriber for one stream subscription.
///
/// Demand is issued explicitly through `request`, so backpressure
/// behavior stays observable in tests.
pub struct TestStreamProbe<T> {
  state:     Mutex<ProbeState<T>>,
  signalled: Condvar,
}

impl<T> TestStreamProbe<T> {
  #[must_use]
  pub fn new() -> Self {
    Self {
      state:     Mutex::new(ProbeState { subscription: None, items: Vec::new(), completed: false, failure: None }),
      signalled: Condvar::new(),
    }
  }

  /// Requests further items from the recorded subscription.
  ///
  /// Panics unless `on_subscribe` has been delivered.
  pub fn request(&self, count: u64) {
    let subscription = lock_or_recover(&self.state).subscription.clone();
    match subscription {
      | Some(subscription) => subscription.request(count),
      | None => panic!("probe was never subscribed"),
    }
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

  /// Panics unless `on_subscribe` has been delivered.
  pub fn assert_subscribed(&self) {
    assert!(lock_or_recover(&self.state).subscription.is_some(), "probe was never subscribed");
  }

  /// Returns a snapshot of the items received so far.
  #[must_use]
  pub fn items(&self) -> Vec<T>
  where
    T: Clone, {
    lock_or_recover(&self.state).items.clone()
  }

  /// Blocks until at least `count` items have been received.
  pub fn await_items(&self, count: usize) {
    self.await_while(|state| state.items.len() < count, "items");
  }

  /// Blocks until a terminal signal arrives.
  pub fn await_terminal(&self) {
    self.await_while(|state| !state.completed && state.failure.is_none(), "terminal signal");
  }

  /// Panics unless exactly the given items have been received.
  pub fn assert_items(&self, expected: &[T])
  where
    T: PartialEq + Debug, {
    assert_eq!(lock_or_recover(&self.state).items, expected);
  }

  /// Panics unless the stream completed without failure.
  pub fn assert_completed(&self) {
    self.await_terminal();
    let state = lock_or_recover(&self.state);
    if let Some(failure) = &state.failure {
      panic!("expected completion, got failure: {failure}");
    }
    assert!(state.completed, "stream never completed");
  }

  /// Panics unless the stream failed with the given message.
  pub fn assert_error_message(&self, expected: &str) {
    self.await_terminal();
    let state = lock_or_recover(&self.state);
    match &state.failure {
      | Some(failure) => assert_eq!(failure.message(), expected),
      | None => panic!("expected failure {expected:?}, got completion"),
    }
  }

  /// Panics unless no terminal signal has been recorded.
  pub fn assert_not_terminated(&self) {
    let state = lock_or_recover(&self.state);
    assert!(!state.completed, "unexpected completion signal");
    assert!(state.failure.is_none(), "unexpected failure signal");
  }

  fn await_while(&self, condition: impl Fn(&ProbeState<T>) -> bool, waiting_for: &str) {
    let mut state = lock_or_recover(&self.state);
    let deadline = std::time::Instant::now() + WAIT_LIMIT;
    while condition(&state) {
      let Some(remaining) = deadline.checked_duration_since(std::time::Instant::now()) else {
        panic!("no {waiting_for} within {WAIT_LIMIT:?}");
      };
      let (guard, _) = self
        .signalled
        .wait_timeout(state, remaining)
        .unwrap_or_else(PoisonError::into_inner);
      state = guard;
    }
  }
}

impl<T> Default for TestStreamProbe<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T> StreamSubscriber<T> for TestStreamProbe<T>
where
  T: Send + Sync,
{
  fn on_subscribe(&self, subscription: Arc<dyn StreamSubscription>) {
    lock_or_recover(&self.state).subscription = Some(subscription);
    self.signalled.notify_all();
  }

  fn on_next(&self, item: T) {
    lock_or_recover(&self.state).items.push(item);
    self.signalled.notify_all();
  }

  fn on_complete(&self) {
    lock_or_recover(&self.state).completed = true;
    self.signalled.notify_all();
  }

  fn on_error(&self, failure: Failure) {
    lock_or_recover(&self.state).failure = Some(failure);
    self.signalled.notify_all();
  }
}
