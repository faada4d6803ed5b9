use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use crate::core::testing::TestUniProbe;
use crate::core::{Executor, Failure, Uni, UniError};
use crate::runtime::ThreadExecutor;

struct CountingExecutor {
  tasks: AtomicU32,
}

impl CountingExecutor {
  fn new() -> Self {
    Self { tasks: AtomicU32::new(0) }
  }
}

impl Executor for CountingExecutor {
  fn execute(&self, task: Box<dyn FnOnce() + Send>) {
    self.tasks.fetch_add(1, Ordering::AcqRel);
    task();
  }
}

#[test]
fn item_is_redirected_through_the_executor() {
  let executor = Arc::new(CountingExecutor::new());
  let uni = Uni::item(3).publish_on(executor.clone());
  let probe = Arc::new(TestUniProbe::new());
  uni.subscribe(probe.clone());
  probe.assert_item(&3);
  assert_eq!(executor.tasks.load(Ordering::Acquire), 1);
}

#[test]
fn failure_is_redirected_through_the_executor() {
  let executor = Arc::new(CountingExecutor::new());
  let uni = Uni::<i32>::failed(Failure::from(UniError::AbsentItem)).publish_on(executor.clone());
  let probe = Arc::new(TestUniProbe::new());
  uni.subscribe(probe.clone());
  probe.assert_failure_message("item is absent");
  assert_eq!(executor.tasks.load(Ordering::Acquire), 1);
}

#[test]
fn resolves_across_a_thread_boundary() {
  let executor = Arc::new(ThreadExecutor::new("uni-publish-on-test"));
  let uni = Uni::item(3).publish_on(executor);
  let probe = Arc::new(TestUniProbe::new());
  uni.subscribe(probe.clone());
  probe.assert_item(&3);
}
