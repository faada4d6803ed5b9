use std::sync::{Mutex, MutexGuard, PoisonError};

/// Cancel-if-not-subscribed wrapper around a cold publisher.
mod cancellable_stream;
/// Promise-like completion handle.
mod completion_handle;
/// Registration token for completion-handle callbacks.
mod completion_registration;
/// Concatenating publisher.
mod concat_publisher;
/// Factory for concatenation stages.
mod concat_stage_factory;
/// Outstanding-demand counter.
mod demand;
/// Fixed-item replay publisher.
mod emit_publisher;
/// Factory for emit stages.
mod emit_stage_factory;
/// Graph-to-publisher builder.
mod engine;
/// Execution-context seam for signal redirection.
mod executor;
/// Publisher failing without items.
mod failed_publisher;
/// Factory for failed stages.
mod failed_stage_factory;
/// Uni failing per subscription.
mod failed_uni;
/// Terminal failure value.
mod failure;
/// Ordered stage description list.
mod graph;
/// Uni resolving from a supplier.
mod item_uni;
/// Per-item transformation publisher.
mod map_publisher;
/// Factory for map stages.
mod map_stage_factory;
/// Per-subscription terminal state token.
mod signal_state;
/// Immutable stage description.
mod stage;
/// Stage construction seam.
mod stage_factory;
/// Stage kind tags.
mod stage_kind;
/// Engine and stream protocol errors.
mod stream_error;
/// Multi-value producer contract.
mod stream_publisher;
/// Multi-value consumer contract.
mod stream_subscriber;
/// Demand and cancellation handle for streams.
mod stream_subscription;
/// Test probes for Uni and stream verification.
pub mod testing;
/// Single-value primitive and operator surface.
mod uni;
/// Absent-item handling operator group.
mod uni_absent_group;
/// Per-subscription exactly-once delivery guard.
mod uni_emitter;
/// Uni-owned error definitions.
mod uni_error;
/// Absent-to-failure operator.
mod uni_fail_on_absent;
/// Completion-handle adapter.
mod uni_from_completion;
/// Stream-to-single adapter.
mod uni_from_stream;
/// Map operator.
mod uni_map;
/// Terminal-signal thread redirection operator.
mod uni_publish_on;
/// Single-value consumer contract.
mod uni_subscriber;
/// Cancellation handle for Uni subscriptions.
mod uni_subscription;
/// Absent-to-alternative operator.
mod uni_switch_on_absent;

pub use cancellable_stream::CancellableStream;
pub use completion_handle::CompletionHandle;
pub use completion_registration::CompletionRegistration;
pub(crate) use concat_publisher::ConcatPublisher;
pub(crate) use concat_stage_factory::ConcatStageFactory;
pub use demand::Demand;
pub(crate) use emit_publisher::EmitPublisher;
pub(crate) use emit_stage_factory::EmitStageFactory;
pub use engine::Engine;
pub use executor::Executor;
pub(crate) use failed_publisher::FailedPublisher;
pub(crate) use failed_stage_factory::FailedStageFactory;
pub(crate) use failed_uni::FailedUni;
pub use failure::Failure;
pub use graph::Graph;
pub(crate) use item_uni::ItemUni;
pub(crate) use map_publisher::MapPublisher;
pub use map_publisher::StreamMapper;
pub(crate) use map_stage_factory::MapStageFactory;
pub(crate) use signal_state::SignalState;
pub use stage::Stage;
pub use stage_factory::StageFactory;
pub use stage_kind::StageKind;
pub use stream_error::StreamError;
pub use stream_publisher::StreamPublisher;
pub use stream_subscriber::StreamSubscriber;
pub use stream_subscription::StreamSubscription;
pub use uni::Uni;
pub(crate) use uni::UniProducer;
pub use uni_absent_group::UniAbsentGroup;
pub(crate) use uni_emitter::UniEmitter;
pub use uni_error::UniError;
pub(crate) use uni_fail_on_absent::UniFailOnAbsent;
pub(crate) use uni_from_completion::{CompletionSource, UniFromCompletion};
pub(crate) use uni_from_stream::UniFromStream;
pub(crate) use uni_map::UniMap;
pub(crate) use uni_publish_on::UniPublishOn;
pub use uni_subscriber::UniSubscriber;
pub use uni_subscription::UniSubscription;
pub(crate) use uni_switch_on_absent::UniSwitchOnAbsent;

/// Fallible supplier invoked once per subscription.
pub(crate) type ItemSupplier<T> = dyn Fn() -> Result<Option<T>, Failure> + Send + Sync;
/// Failure supplier invoked once per subscription.
pub(crate) type FailureSupplier = dyn Fn() -> Failure + Send + Sync;

pub(crate) fn lock_or_recover<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
  mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
