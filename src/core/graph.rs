//! Stage graph definition.

use std::sync::Arc;

use super::{Failure, Stage};

/// Ordered stage descriptions forming one pipeline.
///
/// Graphs are immutable once built and freely shared across pipeline
/// builds; the engine reads them without consuming them.
pub struct Graph<T> {
  stages: Vec<Stage<T>>,
}

impl<T> Graph<T> {
  /// Creates a graph from raw stages.
  #[must_use]
  pub fn from_stages(stages: Vec<Stage<T>>) -> Self {
    Self { stages }
  }

  /// Creates a graph emitting the given items.
  #[must_use]
  pub fn emit(items: Vec<T>) -> Self {
    Self::from_stages(vec![Stage::Emit { items }])
  }

  /// Creates a graph failing with the given failure.
  #[must_use]
  pub fn failed(failure: Failure) -> Self {
    Self::from_stages(vec![Stage::Failed { failure }])
  }

  /// Creates a graph concatenating two nested graphs.
  #[must_use]
  pub fn concat(first: Graph<T>, second: Graph<T>) -> Self {
    Self::from_stages(vec![Stage::Concat { first, second }])
  }

  /// Appends a per-item transformation stage.
  #[must_use]
  pub fn map(mut self, mapper: impl Fn(T) -> T + Send + Sync + 'static) -> Self {
    self.stages.push(Stage::Map { mapper: Arc::new(mapper) });
    self
  }

  /// Returns the stages in pipeline order.
  #[must_use]
  pub fn stages(&self) -> &[Stage<T>] {
    &self.stages
  }
}

impl<T> Clone for Graph<T>
where
  T: Clone,
{
  fn clone(&self) -> Self {
    Self { stages: self.stages.clone() }
  }
}
