//! Terminal failure value.

use std::error::Error;
use std::fmt;
use std::sync::Arc;

use super::{StreamError, UniError};

/// Terminal failure value carried by `on_failure` / `on_error` signals.
///
/// The original error is carried unmodified; cloning shares it.
#[derive(Clone)]
pub struct Failure {
  inner: Arc<dyn Error + Send + Sync + 'static>,
}

impl Failure {
  /// Wraps an error value.
  pub fn new(error: impl Error + Send + Sync + 'static) -> Self {
    Self { inner: Arc::new(error) }
  }

  /// Renders the carried error message.
  #[must_use]
  pub fn message(&self) -> String {
    self.inner.to_string()
  }

  /// Returns `true` when the carried error is of type `E`.
  #[must_use]
  pub fn is<E>(&self) -> bool
  where
    E: Error + 'static, {
    self.inner.as_ref().is::<E>()
  }

  /// Returns a reference to the carried error when it is of type `E`.
  #[must_use]
  pub fn downcast_ref<E>(&self) -> Option<&E>
  where
    E: Error + 'static, {
    self.inner.as_ref().downcast_ref::<E>()
  }
}

impl fmt::Display for Failure {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::Display::fmt(&self.inner, f)
  }
}

impl fmt::Debug for Failure {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_tuple("Failure").field(&self.message()).finish()
  }
}

impl From<UniError> for Failure {
  fn from(error: UniError) -> Self {
    Self::new(error)
  }
}

impl From<StreamError> for Failure {
  fn from(error: StreamError) -> Self {
    Self::new(error)
  }
}
