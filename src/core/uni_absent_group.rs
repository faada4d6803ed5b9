//! Absent-item operator group.


use std::sync::Arc;

use super::{Failure, Uni, UniError, UniFailOnAbsent, UniSwitchOnAbsent};

/// Operator group handling an absent upstream resolution.
///
/// None of these operators engage when upstream fails; the failure
/// propagates unchanged.
pub struct UniAbsentGroup<T> {
  source: Uni<T>,
}

impl<T> UniAbsentGroup<T>
where
  T: Send + Sync + 'static,
{
  pub(crate) fn new(source: Uni<T>) -> Self {
    Self { source }
  }

  /// Replaces an absent item with the default absent-item failure.
  #[must_use]
  pub fn fail(&self) -> Uni<T> {
    self.fail_with_supplier(|| Failure::from(UniError::AbsentItem))
  }

  /// Replaces an absent item with the given failure.
  #[must_use]
  pub fn fail_with(&self, failure: Failure) -> Uni<T> {
    self.fail_with_supplier(move || failure.clone())
  }

  /// Replaces an absent item with a failure produced per subscription.
  pub fn fail_with_supplier(&self, supplier: impl Fn() -> Failure + Send + Sync + 'static) -> Uni<T> {
    Uni::from_producer(Arc::new(UniFailOnAbsent::new(self.source.clone(), Arc::new(supplier))))
  }

  /// Switches to the given alternative when the item is absent.
  #[must_use]
  pub fn switch_to(&self, alternative: &Uni<T>) -> Uni<T> {
    let alternative = alternative.clone();
    self.switch_to_lazy(move || Ok(alternative.clone()))
  }

  /// Switches to a lazily supplied alternative when the item is absent.
  ///
  /// The supplier's error is delivered as the failure signal.
  pub fn switch_to_lazy(&self, supplier: impl Fn() -> Result<Uni<T>, Failure> + Send + Sync + 'static) -> Uni<T> {
    Uni::from_producer(Arc::new(UniSwitchOnAbsent::new(self.source.clone(), Arc::new(supplier))))
  }

  /// Resolves with the given fallback when the item is absent.
  #[must_use]
  pub fn continue_with(&self, fallback: T) -> Uni<T>
  where
    T: Clone, {
    self.switch_to(&Uni::item(fallback))
  }

  /// Resolves with a lazily computed fallback when the item is absent.
  ///
  /// A supplier producing no item is escalated to a failure.
  pub fn continue_with_supplier(&self, supplier: impl Fn() -> Option<T> + Send + Sync + 'static) -> Uni<T> {
    let fallback = Uni::item_with(move || Ok(supplier()))
      .on_absent()
      .fail_with_supplier(|| Failure::from(UniError::AbsentFallback));
    self.switch_to(&fallback)
  }
}
