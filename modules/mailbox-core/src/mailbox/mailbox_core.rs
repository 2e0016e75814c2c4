use super::{InsertEnd, MailboxError, MailboxSnapshot, MailboxState, WaitSide};
use crate::{
  counters::CapacityCounters,
  ring::SlotRing,
  wait::{ThreadQueue, WakeReason},
};


/// Mailbox state machine without any locking.
///
/// Every method here is an I-class operation: it never blocks, and the caller is responsible for
/// running it inside the critical section. [`Mailbox`](super::Mailbox) provides that guard and the
/// blocking forms on top.
#[derive(Debug)]
pub struct MailboxCore<'a, T, Q> {
  ring:      SlotRing<'a, T>,
  counters:  CapacityCounters,
  state:     MailboxState,
  producers: Q,
  consumers: Q,
}

impl<'a, T: Copy, Q: ThreadQueue> MailboxCore<'a, T, Q> {
  /// Initializes an active, empty mailbox over `buffer`.
  ///
  /// # Panics
  ///
  /// Panics if `buffer` has no slots.
  #[must_use]
  pub fn new(buffer: &'a mut [T]) -> Self {
    assert!(!buffer.is_empty(), "mailbox buffer must hold at least one slot");
    let capacity = buffer.len();
    Self {
      ring:      SlotRing::new(buffer),
      counters:  CapacityCounters::new(capacity),
      state:     MailboxState::Active,
      producers: Q::default(),
      consumers: Q::default(),
    }
  }

  /// Number of slots.
  #[must_use]
  pub fn size(&self) -> usize {
    self.ring.capacity()
  }

  /// Slots available to producers.
  #[must_use]
  pub const fn free_count(&self) -> usize {
    self.counters.free()
  }

  /// Slots holding a message.
  #[must_use]
  pub const fn used_count(&self) -> usize {
    self.counters.used()
  }

  /// Current lifecycle state.
  #[must_use]
  pub const fn state(&self) -> MailboxState {
    self.state
  }

  /// Whether the mailbox rejects traffic.
  #[must_use]
  pub const fn is_suspended(&self) -> bool {
    matches!(self.state, MailboxState::Suspended)
  }

  /// Number of producers blocked waiting for a free slot.
  #[must_use]
  pub fn waiting_producers(&self) -> usize {
    self.producers.len()
  }

  /// Number of consumers blocked waiting for a message.
  #[must_use]
  pub fn waiting_consumers(&self) -> usize {
    self.consumers.len()
  }

  /// Captures counters, cursors and state at once.
  #[must_use]
  pub fn snapshot(&self) -> MailboxSnapshot {
    MailboxSnapshot {
      capacity:     self.size(),
      free:         self.counters.free(),
      used:         self.counters.used(),
      read_cursor:  self.ring.read_cursor(),
      write_cursor: self.ring.write_cursor(),
      state:        self.state,
    }
  }

  /// Posts `msg` behind every pending message.
  ///
  /// # Errors
  ///
  /// Returns [`MailboxError::Reset`] while suspended and [`MailboxError::Timeout`] when no slot is
  /// free.
  pub fn try_post(&mut self, msg: T) -> Result<(), MailboxError> {
    self.try_insert(msg, InsertEnd::Tail)
  }

  /// Posts `msg` in front of every pending message so it is the next one fetched.
  ///
  /// # Errors
  ///
  /// Returns [`MailboxError::Reset`] while suspended and [`MailboxError::Timeout`] when no slot is
  /// free.
  pub fn try_post_ahead(&mut self, msg: T) -> Result<(), MailboxError> {
    self.try_insert(msg, InsertEnd::Head)
  }

  /// Removes the message at the head.
  ///
  /// # Errors
  ///
  /// Returns [`MailboxError::Reset`] while suspended and [`MailboxError::Timeout`] when the
  /// mailbox is empty.
  pub fn try_fetch(&mut self) -> Result<T, MailboxError> {
    self.ensure_active()?;
    if !self.counters.can_remove() {
      return Err(MailboxError::Timeout);
    }
    let msg = self.ring.read_from_head();
    self.counters.on_remove();
    self.producers.wake_one(WakeReason::Signaled);
    Ok(msg)
  }

  /// Returns the message at the head without removing it.
  ///
  /// # Errors
  ///
  /// Returns [`MailboxError::Reset`] while suspended and [`MailboxError::Timeout`] when the
  /// mailbox is empty.
  pub fn peek(&self) -> Result<T, MailboxError> {
    self.ensure_active()?;
    if !self.counters.can_remove() {
      return Err(MailboxError::Timeout);
    }
    Ok(self.ring.peek_head())
  }

  /// Empties and suspends the mailbox, waking every blocked thread with [`WakeReason::Reset`].
  ///
  /// Calling it again while suspended changes nothing.
  pub fn reset(&mut self) {
    self.ring.rewind();
    self.counters.reset();
    self.state = MailboxState::Suspended;
    let woken_producers = self.producers.wake_all(WakeReason::Reset);
    let woken_consumers = self.consumers.wake_all(WakeReason::Reset);
    tracing::debug!(capacity = self.size(), woken_producers, woken_consumers, "mailbox reset");
  }

  /// Returns a suspended mailbox to normal operation. Counters and cursors are kept.
  pub fn resume(&mut self) {
    if self.is_suspended() {
      tracing::debug!(used = self.counters.used(), "mailbox resumed");
    }
    self.state = MailboxState::Active;
  }

  pub(crate) fn try_insert(&mut self, msg: T, end: InsertEnd) -> Result<(), MailboxError> {
    self.ensure_active()?;
    if !self.counters.can_insert() {
      return Err(MailboxError::Timeout);
    }
    match end {
      | InsertEnd::Tail => self.ring.write_at_tail(msg),
      | InsertEnd::Head => self.ring.write_at_head(msg),
    }
    self.counters.on_insert();
    self.consumers.wake_one(WakeReason::Signaled);
    Ok(())
  }

  pub(crate) fn waiters_mut(&mut self, side: WaitSide) -> &mut Q {
    match side {
      | WaitSide::Producers => &mut self.producers,
      | WaitSide::Consumers => &mut self.consumers,
    }
  }

  const fn ensure_active(&self) -> Result<(), MailboxError> {
    match self.state {
      | MailboxState::Active => Ok(()),
      | MailboxState::Suspended => Err(MailboxError::Reset),
    }
  }
}
