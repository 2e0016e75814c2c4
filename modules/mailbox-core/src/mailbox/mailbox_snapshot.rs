use super::MailboxState;

/// Consistent view of a mailbox's counters and cursors taken inside the critical section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MailboxSnapshot {
  /// Total number of slots.
  pub capacity:     usize,
  /// Slots available to producers.
  pub free:         usize,
  /// Slots holding a message.
  pub used:         usize,
  /// Offset of the next slot to be fetched.
  pub read_cursor:  usize,
  /// Offset of the next slot to be posted at the tail.
  pub write_cursor: usize,
  /// Lifecycle state.
  pub state:        MailboxState,
}

impl MailboxSnapshot {
  /// Whether the mailbox is empty with both cursors at the buffer origin.
  #[must_use]
  pub const fn is_at_origin(&self) -> bool {
    self.used == 0 && self.free == self.capacity && self.read_cursor == 0 && self.write_cursor == 0
  }
}
