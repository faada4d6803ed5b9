//! Stream error definitions.


use super::StageKind;

/// Errors produced by graph building and the stream protocol.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StreamError {
  /// No factory is registered for the stage kind.
  #[error("no factory registered for stage kind {0:?}")]
  UnrecognizedStage(StageKind),
  /// The graph contains no stages.
  #[error("graph contains no stages")]
  EmptyGraph,
  /// The stage kind is not valid at its position in the graph.
  #[error("stage kind {0:?} is misplaced in the graph")]
  MisplacedStage(StageKind),
  /// Demand request is invalid.
  #[error("invalid demand request")]
  InvalidDemand,
}
