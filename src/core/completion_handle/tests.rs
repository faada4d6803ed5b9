use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use super::CompletionHandle;
use crate::core::{Failure, UniError};

#[test]
fn starts_unsettled() {
  let handle = CompletionHandle::<i32>::new();
  assert!(!handle.is_settled());
}

#[test]
fn complete_settles_and_notifies() {
  let handle = CompletionHandle::new();
  let seen = Arc::new(Mutex::new(None));
  let recorded = Arc::clone(&seen);
  handle.register(move |outcome| {
    *recorded.lock().unwrap() = Some(outcome);
  });
  handle.complete(Some(4));
  assert!(handle.is_settled());
  let taken = seen.lock().unwrap().take();
  match taken {
    | Some(Ok(Some(4))) => {},
    | other => panic!("unexpected outcome: {other:?}"),
  }
}

#[test]
fn registering_after_settlement_fires_immediately() {
  let handle = CompletionHandle::new();
  handle.complete(Some(4));
  let seen = Arc::new(Mutex::new(None));
  let recorded = Arc::clone(&seen);
  handle.register(move |outcome| {
    *recorded.lock().unwrap() = Some(outcome);
  });
  let taken = seen.lock().unwrap().take();
  match taken {
    | Some(Ok(Some(4))) => {},
    | other => panic!("unexpected outcome: {other:?}"),
  }
}

#[test]
fn first_settlement_wins() {
  let handle = CompletionHandle::new();
  handle.complete(Some(1));
  handle.complete(Some(2));
  handle.fail(Failure::from(UniError::AbsentItem));
  let seen = Arc::new(Mutex::new(None));
  let recorded = Arc::clone(&seen);
  handle.register(move |outcome| {
    *recorded.lock().unwrap() = Some(outcome);
  });
  let taken = seen.lock().unwrap().take();
  match taken {
    | Some(Ok(Some(1))) => {},
    | other => panic!("unexpected outcome: {other:?}"),
  }
}

#[test]
fn fail_delivers_the_failure() {
  let handle = CompletionHandle::<i32>::new();
  let seen = Arc::new(Mutex::new(None));
  let recorded = Arc::clone(&seen);
  handle.register(move |outcome| {
    *recorded.lock().unwrap() = Some(outcome);
  });
  handle.fail(Failure::from(UniError::AbsentItem));
  let taken = seen.lock().unwrap().take();
  match taken {
    | Some(Err(failure)) => assert_eq!(failure.message(), "item is absent"),
    | other => panic!("unexpected outcome: {other:?}"),
  }
}

#[test]
fn each_listener_fires_once() {
  let handle = CompletionHandle::new();
  let calls = Arc::new(AtomicU32::new(0));
  let counted = Arc::clone(&calls);
  handle.register(move |_| {
    counted.fetch_add(1, Ordering::AcqRel);
  });
  handle.complete(Some(1));
  handle.complete(Some(2));
  assert_eq!(calls.load(Ordering::Acquire), 1);
}

#[test]
fn unregister_suppresses_delivery() {
  let handle = CompletionHandle::new();
  let calls = Arc::new(AtomicU32::new(0));
  let counted = Arc::clone(&calls);
  let registration = handle.register(move |_| {
    counted.fetch_add(1, Ordering::AcqRel);
  });
  handle.unregister(registration);
  handle.complete(Some(1));
  assert_eq!(calls.load(Ordering::Acquire), 0);
}

#[test]
fn unregister_only_removes_its_own_registration() {
  let handle = CompletionHandle::new();
  let calls = Arc::new(AtomicU32::new(0));
  let first_counted = Arc::clone(&calls);
  let registration = handle.register(move |_| {
    first_counted.fetch_add(1, Ordering::AcqRel);
  });
  let second_counted = Arc::clone(&calls);
  handle.register(move |_| {
    second_counted.fetch_add(10, Ordering::AcqRel);
  });
  handle.unregister(registration);
  handle.complete(Some(1));
  assert_eq!(calls.load(Ordering::Acquire), 10);
}
