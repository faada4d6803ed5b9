//! Tokio-backed executor.

#[cfg(test)]
mod tests;

use tokio::runtime::Handle;

use crate::core::Executor;

/// Executor running tasks on a Tokio runtime's blocking pool.
///
/// Redirected signals may run user callbacks of unknown duration, so they
/// go to `spawn_blocking` rather than the async worker threads.
pub struct TokioExecutor {
  handle: Handle,
}

impl TokioExecutor {
  /// Creates an executor bound to the given runtime handle.
  #[must_use]
  pub const fn new(handle: Handle) -> Self {
    Self { handle }
  }

  /// Creates an executor bound to the current Tokio runtime.
  ///
  /// Panics outside a runtime context, like [`Handle::current`].
  #[must_use]
  pub fn current() -> Self {
    Self::new(Handle::current())
  }
}

impl Executor for TokioExecutor {
  fn execute(&self, task: Box<dyn FnOnce() + Send>) {
    self.handle.spawn_blocking(task);
  }
}
