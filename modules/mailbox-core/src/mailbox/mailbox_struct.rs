use core::{cell::RefCell, marker::PhantomData};

use critical_section::{CriticalSection, Mutex};

use super::{InsertEnd, MailboxCore, MailboxError, MailboxSnapshot, WaitSide};
use crate::wait::{WaitPolicy, WaitPrimitive, WakeReason};


type Core<'a, T, P> = MailboxCore<'a, T, <P as WaitPrimitive>::Queue>;

/// Bounded mailbox shared between threads and interrupt handlers.
///
/// The state lives behind the global critical section. Blocking forms (`*_timeout`) take the
/// section themselves and release it while the caller is suspended through `P`. I-class forms
/// (`*_i`) take a [`CriticalSection`] token to prove the caller already holds it, and never
/// block.
pub struct Mailbox<'a, T, P: WaitPrimitive> {
  inner: Mutex<RefCell<Core<'a, T, P>>>,
  _pd:   PhantomData<fn() -> P>,
}

impl<'a, T: Copy, P: WaitPrimitive> Mailbox<'a, T, P> {
  /// Initializes an active, empty mailbox over the caller-owned `buffer`.
  ///
  /// # Panics
  ///
  /// Panics if `buffer` has no slots.
  #[must_use]
  pub fn new(buffer: &'a mut [T]) -> Self {
    Self { inner: Mutex::new(RefCell::new(MailboxCore::new(buffer))), _pd: PhantomData }
  }

  /// Runs `f` against the state machine under the caller's critical section.
  pub fn with_core<R>(&self, cs: CriticalSection<'_>, f: impl FnOnce(&mut Core<'a, T, P>) -> R) -> R {
    let mut core = self.inner.borrow(cs).borrow_mut();
    f(&mut core)
  }

  /// Takes the critical section and runs `f` against the state machine.
  pub fn with_core_locked<R>(&self, f: impl FnOnce(&mut Core<'a, T, P>) -> R) -> R {
    critical_section::with(|cs| self.with_core(cs, f))
  }

  /// Posts `msg` at the tail, waiting according to `policy` while the mailbox is full.
  ///
  /// # Errors
  ///
  /// Returns [`MailboxError::Reset`] if the mailbox is or becomes suspended, and
  /// [`MailboxError::Timeout`] if no slot frees up within `policy`.
  pub fn post_timeout(&self, msg: T, policy: WaitPolicy) -> Result<(), MailboxError> {
    self.insert_timeout(msg, InsertEnd::Tail, policy)
  }

  /// Posts `msg` at the head, waiting according to `policy` while the mailbox is full.
  ///
  /// # Errors
  ///
  /// Returns [`MailboxError::Reset`] if the mailbox is or becomes suspended, and
  /// [`MailboxError::Timeout`] if no slot frees up within `policy`.
  pub fn post_ahead_timeout(&self, msg: T, policy: WaitPolicy) -> Result<(), MailboxError> {
    self.insert_timeout(msg, InsertEnd::Head, policy)
  }

  /// Fetches the message at the head, waiting according to `policy` while the mailbox is empty.
  ///
  /// # Errors
  ///
  /// Returns [`MailboxError::Reset`] if the mailbox is or becomes suspended, and
  /// [`MailboxError::Timeout`] if no message arrives within `policy`.
  pub fn fetch_timeout(&self, policy: WaitPolicy) -> Result<T, MailboxError> {
    self.wait_for(policy, WaitSide::Consumers, MailboxCore::try_fetch)
  }

  /// I-class post at the tail.
  ///
  /// # Errors
  ///
  /// Returns [`MailboxError::Reset`] while suspended and [`MailboxError::Timeout`] when full.
  pub fn post_i(&self, cs: CriticalSection<'_>, msg: T) -> Result<(), MailboxError> {
    self.with_core(cs, |core| core.try_post(msg))
  }

  /// I-class post at the head.
  ///
  /// # Errors
  ///
  /// Returns [`MailboxError::Reset`] while suspended and [`MailboxError::Timeout`] when full.
  pub fn post_ahead_i(&self, cs: CriticalSection<'_>, msg: T) -> Result<(), MailboxError> {
    self.with_core(cs, |core| core.try_post_ahead(msg))
  }

  /// I-class fetch from the head.
  ///
  /// # Errors
  ///
  /// Returns [`MailboxError::Reset`] while suspended and [`MailboxError::Timeout`] when empty.
  pub fn fetch_i(&self, cs: CriticalSection<'_>) -> Result<T, MailboxError> {
    self.with_core(cs, MailboxCore::try_fetch)
  }

  /// I-class look at the head message without removing it.
  ///
  /// # Errors
  ///
  /// Returns [`MailboxError::Reset`] while suspended and [`MailboxError::Timeout`] when empty.
  pub fn peek_i(&self, cs: CriticalSection<'_>) -> Result<T, MailboxError> {
    self.with_core(cs, |core| core.peek())
  }

  /// I-class reset: empties and suspends the mailbox, waking every waiter with a reset.
  pub fn reset_i(&self, cs: CriticalSection<'_>) {
    self.with_core(cs, MailboxCore::reset);
  }

  /// Resets the mailbox from thread context.
  pub fn reset(&self) {
    self.with_core_locked(MailboxCore::reset);
  }

  /// Returns the mailbox to normal operation; callable from any context.
  pub fn resume_x(&self) {
    self.with_core_locked(MailboxCore::resume);
  }

  /// Number of slots.
  #[must_use]
  pub fn size_i(&self, cs: CriticalSection<'_>) -> usize {
    self.with_core(cs, |core| core.size())
  }

  /// Slots available to producers.
  #[must_use]
  pub fn free_count_i(&self, cs: CriticalSection<'_>) -> usize {
    self.with_core(cs, |core| core.free_count())
  }

  /// Slots holding a message.
  #[must_use]
  pub fn used_count_i(&self, cs: CriticalSection<'_>) -> usize {
    self.with_core(cs, |core| core.used_count())
  }

  /// Counters, cursors and state observed under the caller's critical section.
  #[must_use]
  pub fn snapshot_i(&self, cs: CriticalSection<'_>) -> MailboxSnapshot {
    self.with_core(cs, |core| core.snapshot())
  }

  /// Takes the critical section and returns a snapshot.
  #[must_use]
  pub fn snapshot(&self) -> MailboxSnapshot {
    self.with_core_locked(|core| core.snapshot())
  }

  fn insert_timeout(&self, msg: T, end: InsertEnd, policy: WaitPolicy) -> Result<(), MailboxError> {
    self.wait_for(policy, WaitSide::Producers, |core| core.try_insert(msg, end))
  }

  /// Retries `attempt` until it stops reporting an unavailable slot or the wait ends.
  ///
  /// `attempt` reports "would block" as [`MailboxError::Timeout`]; with a non-zero policy that
  /// result enqueues the caller on `side` instead of being returned.
  fn wait_for<R>(
    &self,
    policy: WaitPolicy,
    side: WaitSide,
    mut attempt: impl FnMut(&mut Core<'a, T, P>) -> Result<R, MailboxError>,
  ) -> Result<R, MailboxError> {
    let deadline = policy.timeout().map(P::deadline_after);
    loop {
      let enqueued = self.with_core_locked(|core| match attempt(core) {
        | Err(MailboxError::Timeout) if !policy.is_no_wait() => Ok(P::enqueue(core.waiters_mut(side))),
        | outcome => Err(outcome),
      });
      let ticket = match enqueued {
        | Ok(ticket) => ticket,
        | Err(outcome) => return outcome,
      };

      tracing::trace!(?side, ?policy, "mailbox caller blocking");
      P::block(&ticket, deadline);

      let reason = self.with_core_locked(|core| P::settle(core.waiters_mut(side), ticket));
      match reason {
        | WakeReason::Signaled => continue,
        | WakeReason::Reset => return Err(MailboxError::Reset),
        | WakeReason::Timeout => {
          tracing::trace!(?side, "mailbox wait timed out");
          return Err(MailboxError::Timeout);
        },
      }
    }
  }
}
