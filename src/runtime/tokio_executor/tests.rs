use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use super::TokioExecutor;
use crate::core::Executor;

#[tokio::test(flavor = "multi_thread")]
async fn runs_the_task_on_the_blocking_pool() {
  let executor = TokioExecutor::current();
  let caller = thread::current().id();
  let (sender, receiver) = mpsc::channel();
  executor.execute(Box::new(move || {
    let _ = sender.send(thread::current().id());
  }));
  let worker = tokio::task::spawn_blocking(move || receiver.recv_timeout(Duration::from_secs(5)))
    .await
    .unwrap()
    .unwrap();
  assert_ne!(worker, caller);
}

#[tokio::test(flavor = "multi_thread")]
async fn bound_handle_outlives_the_context_check() {
  let executor = TokioExecutor::new(tokio::runtime::Handle::current());
  let (sender, receiver) = mpsc::channel();
  executor.execute(Box::new(move || {
    let _ = sender.send(42);
  }));
  let value = tokio::task::spawn_blocking(move || receiver.recv_timeout(Duration::from_secs(5)))
    .await
    .unwrap()
    .unwrap();
  assert_eq!(value, 42);
}
