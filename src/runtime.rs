/// Dedicated-thread executor.
mod thread_executor;
/// Tokio blocking-pool executor.
mod tokio_executor;

pub use thread_executor::ThreadExecutor;
pub use tokio_executor::TokioExecutor;
