use std::sync::Arc;

use crate::core::testing::TestUniProbe;
use crate::core::{CompletionHandle, Failure, Uni, UniError};

#[test]
fn resolves_when_the_handle_completes() {
  let handle = CompletionHandle::new();
  let uni = Uni::from_completion(&handle);
  let probe = Arc::new(TestUniProbe::new());
  uni.subscribe(probe.clone());
  probe.assert_not_terminated();
  handle.complete(Some(6));
  probe.assert_item(&6);
}

#[test]
fn resolves_immediately_from_a_settled_handle() {
  let handle = CompletionHandle::new();
  handle.complete(Some(6));
  let uni = Uni::from_completion(&handle);
  let probe = Arc::new(TestUniProbe::new());
  uni.subscribe(probe.clone());
  probe.assert_item(&6);
}

#[test]
fn absent_completion_resolves_absent() {
  let handle = CompletionHandle::<i32>::new();
  let uni = Uni::from_completion(&handle);
  let probe = Arc::new(TestUniProbe::new());
  uni.subscribe(probe.clone());
  handle.complete(None);
  probe.assert_absent();
}

#[test]
fn handle_failure_becomes_the_failure_signal() {
  let handle = CompletionHandle::<i32>::new();
  let uni = Uni::from_completion(&handle);
  let probe = Arc::new(TestUniProbe::new());
  uni.subscribe(probe.clone());
  handle.fail(Failure::from(UniError::AbsentItem));
  probe.assert_failure_message("item is absent");
}

#[test]
fn each_subscription_registers_its_own_callback() {
  let handle = CompletionHandle::new();
  let uni = Uni::from_completion(&handle);
  let first = Arc::new(TestUniProbe::new());
  let second = Arc::new(TestUniProbe::new());
  uni.subscribe(first.clone());
  uni.subscribe(second.clone());
  handle.complete(Some(6));
  first.assert_item(&6);
  second.assert_item(&6);
}

#[test]
fn cancellation_unregisters_the_callback() {
  let handle = CompletionHandle::new();
  let uni = Uni::from_completion(&handle);
  let probe = Arc::new(TestUniProbe::new());
  uni.subscribe(probe.clone());
  probe.cancel();
  handle.complete(Some(6));
  probe.assert_not_terminated();
}

#[test]
fn cancellation_after_settlement_is_inert() {
  let handle = CompletionHandle::new();
  let uni = Uni::from_completion(&handle);
  let probe = Arc::new(TestUniProbe::new());
  uni.subscribe(probe.clone());
  handle.complete(Some(6));
  probe.cancel();
  probe.assert_item(&6);
}

#[test]
fn deferred_supplier_runs_per_subscription() {
  let uni = Uni::from_completion_with(|| {
    let handle = CompletionHandle::new();
    handle.complete(Some(6));
    Ok(handle)
  });
  let probe = Arc::new(TestUniProbe::new());
  uni.subscribe(probe.clone());
  probe.assert_item(&6);
}

#[test]
fn deferred_supplier_error_becomes_the_failure_signal() {
  let uni = Uni::<i32>::from_completion_with(|| Err(Failure::from(UniError::AbsentItem)));
  let probe = Arc::new(TestUniProbe::new());
  uni.subscribe(probe.clone());
  probe.assert_failure_message("item is absent");
}
