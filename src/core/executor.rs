//! Executor contract.

/// Execution context used to redirect signal delivery off producer threads.
///
/// The core owns no threads; implementations decide where and when the
/// task runs. A dropped task suppresses the redirected signal, so
/// implementations should only drop tasks on teardown.
pub trait Executor: Send + Sync {
  /// Schedules the task for execution.
  fn execute(&self, task: Box<dyn FnOnce() + Send>);
}
