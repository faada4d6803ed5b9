//! Reactive runtime built around two cold asynchronous primitives: a
//! single-resolution value (`Uni`) and declarative multi-value pipelines
//! assembled from stage graphs by an `Engine`.
//!
//! The core owns no threads. All concurrency originates from producer
//! threads supplied by collaborators; per-subscription atomic state keeps
//! terminal delivery exactly-once regardless of which thread signals.

/// Core contracts, operators, and the stage-graph engine.
pub mod core;
/// Execution-context adapters for std threads and tokio runtimes.
pub mod runtime;
