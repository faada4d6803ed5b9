//! Concat stage factory.

use std::sync::Arc;

use super::{ConcatPublisher, Engine, Stage, StageFactory, StreamError, StreamPublisher};

/// Builds concatenation publishers from two nested graphs.
///
/// Both nested graphs are built at this point, so a malformed nested graph
/// surfaces as a build-time error rather than at subscription.
pub(crate) struct ConcatStageFactory;

impl<T> StageFactory<T> for ConcatStageFactory
where
  T: Clone + Send + Sync + 'static,
{
  fn create(
    &self,
    engine: &Engine<T>,
    stage: &Stage<T>,
    upstream: Option<Arc<dyn StreamPublisher<T>>>,
  ) -> Result<Arc<dyn StreamPublisher<T>>, StreamError> {
    if upstream.is_some() {
      return Err(StreamError::MisplacedStage(stage.kind()));
    }
    match stage {
      | Stage::Concat { first, second } => {
        let first = engine.build_publisher(first)?;
        let second = engine.build_publisher(second)?;
        Ok(Arc::new(ConcatPublisher::new(first, second)))
      },
      | _ => Err(StreamError::MisplacedStage(stage.kind())),
    }
  }
}
