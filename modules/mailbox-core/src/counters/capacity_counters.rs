
/// Free/used slot counters of a mailbox.
///
/// Both counters are only touched inside the critical section. Outside of it they always sum to
/// the capacity they were created with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CapacityCounters {
  free: usize,
  used: usize,
}

impl CapacityCounters {
  /// Counters for an empty mailbox of `capacity` slots.
  #[must_use]
  pub const fn new(capacity: usize) -> Self {
    Self { free: capacity, used: 0 }
  }

  /// Number of slots available to producers.
  #[must_use]
  pub const fn free(&self) -> usize {
    self.free
  }

  /// Number of slots holding a message.
  #[must_use]
  pub const fn used(&self) -> usize {
    self.used
  }

  /// Sum of both counters.
  #[must_use]
  pub const fn capacity(&self) -> usize {
    self.free + self.used
  }

  /// Whether an insert may proceed without waiting.
  #[must_use]
  pub const fn can_insert(&self) -> bool {
    self.free > 0
  }

  /// Whether a remove may proceed without waiting.
  #[must_use]
  pub const fn can_remove(&self) -> bool {
    self.used > 0
  }

  /// Accounts for one message written into a free slot.
  pub fn on_insert(&mut self) {
    debug_assert!(self.free > 0, "insert without a free slot");
    self.free -= 1;
    self.used += 1;
  }

  /// Accounts for one message read out of a used slot.
  pub fn on_remove(&mut self) {
    debug_assert!(self.used > 0, "remove without a used slot");
    self.used -= 1;
    self.free += 1;
  }

  /// Returns to the empty configuration.
  pub fn reset(&mut self) {
    *self = Self::new(self.capacity());
  }
}
