//! Failed stage factory.

use std::sync::Arc;

use super::{Engine, FailedPublisher, Stage, StageFactory, StreamError, StreamPublisher};

/// Builds failed-stage publishers.
pub(crate) struct FailedStageFactory;

impl<T> StageFactory<T> for FailedStageFactory
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
      | Stage::Failed { failure } => Ok(Arc::new(FailedPublisher::new(failure.clone()))),
      | _ => Err(StreamError::MisplacedStage(stage.kind())),
    }
  }
}
