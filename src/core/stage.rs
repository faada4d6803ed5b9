//! Stage definitions.

use std::sync::Arc;

use super::{Failure, Graph, StageKind, StreamMapper};

/// Immutable description of one pipeline operation.
///
/// A stage carries only the data needed to construct it; all mutable state
/// lives in per-subscription objects created at subscribe time.
pub enum Stage<T> {
  /// Emits the items in order, honoring demand.
  Emit {
    /// Items replayed to every subscription.
    items: Vec<T>,
  },
  /// Fails immediately with the failure.
  Failed {
    /// Failure delivered to every subscription.
    failure: Failure,
  },
  /// Emits every item of `first`, then every item of `second`.
  Concat {
    /// Pipeline whose items are forwarded first.
    first:  Graph<T>,
    /// Pipeline subscribed only after `first` completes.
    second: Graph<T>,
  },
  /// Transforms each upstream item.
  Map {
    /// Transformation applied per item.
    mapper: Arc<StreamMapper<T>>,
  },
}

impl<T> Stage<T> {
  /// Returns the kind tag of this stage.
  #[must_use]
  pub const fn kind(&self) -> StageKind {
    match self {
      | Self::Emit { .. } => StageKind::Emit,
      | Self::Failed { .. } => StageKind::Failed,
      | Self::Concat { .. } => StageKind::Concat,
      | Self::Map { .. } => StageKind::Map,
    }
  }
}

impl<T> Clone for Stage<T>
where
  T: Clone,
{
  fn clone(&self) -> Self {
    match self {
      | Self::Emit { items } => Self::Emit { items: items.clone() },
      | Self::Failed { failure } => Self::Failed { failure: failure.clone() },
      | Self::Concat { first, second } => Self::Concat { first: first.clone(), second: second.clone() },
      | Self::Map { mapper } => Self::Map { mapper: mapper.clone() },
    }
  }
}
