//! Stage kind tags.

/// Tags identifying stage kinds; keys of the engine's factory registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StageKind {
  /// Source emitting a fixed item list.
  Emit,
  /// Source failing without items.
  Failed,
  /// Source concatenating two nested graphs.
  Concat,
  /// Intermediate per-item transformation.
  Map,
}

impl StageKind {
  /// Returns `true` for kinds that start a pipeline.
  #[must_use]
  pub const fn starts_pipeline(self) -> bool {
    matches!(self, Self::Emit | Self::Failed | Self::Concat)
  }
}
