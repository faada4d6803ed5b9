//! Thread-backed executor.


use std::thread;

use crate::core::Executor;

/// Executor spawning one named thread per task.
///
/// Suited to low-frequency redirection such as moving terminal signals off
/// a caller's thread; tasks never share a thread.
pub struct ThreadExecutor {
  name: String,
}

impl ThreadExecutor {
  /// Creates an executor whose threads carry the given name.
  #[must_use]
  pub fn new(name: impl Into<String>) -> Self {
    Self { name: name.into() }
  }
}

impl Executor for ThreadExecutor {
  fn execute(&self, task: Box<dyn FnOnce() + Send>) {
    let spawned = thread::Builder::new().name(self.name.clone()).spawn(task);
    if let Err(error) = spawned {
      tracing::error!("failed to spawn executor thread {}: {error}", self.name);
    }
  }
}
