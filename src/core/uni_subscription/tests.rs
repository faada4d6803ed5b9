use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use super::{CancelHook, UniSubscription};
use crate::core::SignalState;

fn subscription_with_hook(hook_runs: &Arc<AtomicU32>) -> UniSubscription {
  let hook_runs = Arc::clone(hook_runs);
  let hook: CancelHook = Box::new(move || {
    hook_runs.fetch_add(1, Ordering::AcqRel);
  });
  UniSubscription::new(Arc::new(SignalState::new()), Arc::new(Mutex::new(Some(hook))))
}

#[test]
fn cancel_runs_the_hook_once() {
  let hook_runs = Arc::new(AtomicU32::new(0));
  let subscription = subscription_with_hook(&hook_runs);
  assert!(!subscription.is_cancelled());
  subscription.cancel();
  subscription.cancel();
  assert_eq!(hook_runs.load(Ordering::Acquire), 1);
  assert!(subscription.is_cancelled());
}

#[test]
fn cancel_after_resolution_is_inert() {
  let hook_runs = Arc::new(AtomicU32::new(0));
  let state = Arc::new(SignalState::new());
  let hook_runs_in_hook = Arc::clone(&hook_runs);
  let hook: CancelHook = Box::new(move || {
    hook_runs_in_hook.fetch_add(1, Ordering::AcqRel);
  });
  let subscription = UniSubscription::new(state.clone(), Arc::new(Mutex::new(Some(hook))));
  assert!(state.try_resolve());
  subscription.cancel();
  assert_eq!(hook_runs.load(Ordering::Acquire), 0);
  assert!(!subscription.is_cancelled());
}

#[test]
fn cancel_without_hook_still_cancels() {
  let subscription = UniSubscription::new(Arc::new(SignalState::new()), Arc::new(Mutex::new(None)));
  subscription.cancel();
  assert!(subscription.is_cancelled());
}
