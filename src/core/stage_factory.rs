//! Stage factory contract.

use std::sync::Arc;

use super::{Engine, Stage, StreamError, StreamPublisher};

/// Turns one stage description into executable pipeline logic.
///
/// One factory serves one stage kind. Factories invoke the engine
/// recursively for nested sub-graphs; construction is purely structural
/// and must not execute anything.
pub trait StageFactory<T>: Send + Sync {
  /// Builds the publisher for `stage`.
  ///
  /// `upstream` is `None` for pipeline-starting stages and `Some` for
  /// intermediate stages.
  ///
  /// # Errors
  ///
  /// Returns a [`StreamError`] when the stage is misplaced or its nested
  /// graphs are malformed.
  fn create(
    &self,
    engine: &Engine<T>,
    stage: &Stage<T>,
    upstream: Option<Arc<dyn StreamPublisher<T>>>,
  ) -> Result<Arc<dyn StreamPublisher<T>>, StreamError>;
}
