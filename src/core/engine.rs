//! Graph-to-publisher engine.

#[cfg(test)]
mod tests;

use std::collections::HashMap;
use std::sync::Arc;

use super::{
  ConcatStageFactory, EmitStageFactory, FailedStageFactory, Graph, MapStageFactory, StageFactory, StageKind,
  StreamError, StreamPublisher,
};

/// Translates stage graphs into executable pipelines.
///
/// The engine is stateless with respect to pipelines: it holds only the
/// stage-factory registrations, and `build_publisher` is deterministic and
/// side-effect-free over the graph description. Each call yields an
/// independently subscribable pipeline; nested graphs are built fresh per
/// use.
pub struct Engine<T> {
  factories: HashMap<StageKind, Arc<dyn StageFactory<T>>>,
}

impl<T> Engine<T>
where
  T: Clone + Send + Sync + 'static,
{
  /// Creates an engine with the built-in stage factories registered.
  #[must_use]
  pub fn new() -> Self {
    let mut engine = Self { factories: HashMap::new() };
    engine.register(StageKind::Emit, Arc::new(EmitStageFactory));
    engine.register(StageKind::Failed, Arc::new(FailedStageFactory));
    engine.register(StageKind::Concat, Arc::new(ConcatStageFactory));
    engine.register(StageKind::Map, Arc::new(MapStageFactory));
    engine
  }

  /// Registers (or replaces) the factory for a stage kind.
  pub fn register(&mut self, kind: StageKind, factory: Arc<dyn StageFactory<T>>) {
    self.factories.insert(kind, factory);
  }

  /// Removes the factory for a stage kind, returning it if present.
  pub fn deregister(&mut self, kind: StageKind) -> Option<Arc<dyn StageFactory<T>>> {
    self.factories.remove(&kind)
  }

  /// Builds an executable pipeline from the graph.
  ///
  /// Nothing executes until the returned publisher is subscribed.
  ///
  /// # Errors
  ///
  /// Configuration errors surface here, never at subscription time:
  /// [`StreamError::EmptyGraph`], [`StreamError::UnrecognizedStage`], and
  /// [`StreamError::MisplacedStage`].
  pub fn build_publisher(&self, graph: &Graph<T>) -> Result<Arc<dyn StreamPublisher<T>>, StreamError> {
    let mut stages = graph.stages().iter();
    let Some(head) = stages.next() else {
      return Err(StreamError::EmptyGraph);
    };
    if !head.kind().starts_pipeline() {
      return Err(StreamError::MisplacedStage(head.kind()));
    }
    let mut publisher = self.factory_for(head.kind())?.create(self, head, None)?;
    for stage in stages {
      if stage.kind().starts_pipeline() {
        return Err(StreamError::MisplacedStage(stage.kind()));
      }
      publisher = self.factory_for(stage.kind())?.create(self, stage, Some(publisher))?;
    }
    Ok(publisher)
  }

  fn factory_for(&self, kind: StageKind) -> Result<&Arc<dyn StageFactory<T>>, StreamError> {
    self.factories.get(&kind).ok_or(StreamError::UnrecognizedStage(kind))
  }
}

impl<T> Default for Engine<T>
where
  T: Clone + Send + Sync + 'static,
{
  fn default() -> Self {
    Self::new()
  }
}
