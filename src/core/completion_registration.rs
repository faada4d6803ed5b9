//! Completion registration token.

/// Token identifying one callback registered on a completion handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionRegistration {
  id: u64,
}

impl CompletionRegistration {
  pub(crate) const fn new(id: u64) -> Self {
    Self { id }
  }

  pub(crate) const fn id(self) -> u64 {
    self.id
  }
}
