//! Map stage factory.

use std::sync::Arc;

use super::{Engine, MapPublisher, Stage, StageFactory, StreamError, StreamPublisher};

/// Builds map-stage publishers over an upstream fragment.
pub(crate) struct MapStageFactory;

impl<T> StageFactory<T> for MapStageFactory
where
  T: Clone + Send + Sync + 'static,
{
  fn create(
    &self,
    _engine: &Engine<T>,
    stage: &Stage<T>,
    upstream: Option<Arc<dyn StreamPublisher<T>>>,
  ) -> Result<Arc<dyn StreamPublisher<T>>, StreamError> {
    let Some(upstream) = upstream else {
      return Err(StreamError::MisplacedStage(stage.kind()));
    };
    match stage {
      | Stage::Map { mapper } => Ok(Arc::new(MapPublisher::new(upstream, mapper.clone()))),
      | _ => Err(StreamError::MisplacedStage(stage.kind())),
    }
  }
}
