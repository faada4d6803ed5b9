//! Emit stage factory.

use std::sync::Arc;

use super::{EmitPublisher, Engine, Stage, StageFactory, StreamError, StreamPublisher};

/// Builds emit-stage publishers.
pub(crate) struct EmitStageFactory;

impl<T> StageFactory<T> for EmitStageFactory
where
  T: Clone + Send + Sync + 'static,
{
  fn create(
    &self,
    _engine: &Engine<T>,
    stage: &Stage<T>,
    upstream: Option<Arc<dyn StreamPublisher<T>>>,
  ) -> Result<Arc<dyn StreamPublisher<T>>, StreamError> {
    if upstream.is_some() {
      return Err(StreamError::MisplacedStage(stage.kind()));
    }
    match stage {
      | Stage::Emit { items } => Ok(Arc::new(EmitPublisher::new(items.clone()))),
      | _ => Err(StreamError::MisplacedStage(stage.kind())),
    }
  }
}
