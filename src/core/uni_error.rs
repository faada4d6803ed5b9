//! Uni error definitions.

#[cfg(test)]
mod tests;

/// Errors produced by the single-value operators themselves.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UniError {
  /// The resolved item was absent where one was required.
  #[error("item is absent")]
  AbsentItem,
  /// A fallback supplier produced no item.
  #[error("fallback produced no item")]
  AbsentFallback,
}
