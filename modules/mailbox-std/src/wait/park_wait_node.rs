use std::{
  thread::{self, Thread, ThreadId},
  time::Instant,
};

use cellex_mailbox_core_rs::WakeReason;
use portable_atomic::{AtomicU8, Ordering};


const STATE_PENDING: u8 = 0;
const STATE_SIGNALED: u8 = 1;
const STATE_RESET: u8 = 2;
const STATE_TIMEOUT: u8 = 3;

/// Queue entry of one parked thread.
///
/// The state word moves from pending to a wake reason exactly once; the thread that completes it
/// unparks the owner.
#[derive(Debug)]
pub struct ParkWaitNode {
  state:  AtomicU8,
  thread: Thread,
}

impl ParkWaitNode {
  /// Creates a pending node owned by the calling thread.
  #[must_use]
  pub fn current() -> Self {
    Self { state: AtomicU8::new(STATE_PENDING), thread: thread::current() }
  }

  /// Identifier of the owning thread.
  #[must_use]
  pub fn thread_id(&self) -> ThreadId {
    self.thread.id()
  }

  /// Delivers `reason` and unparks the owner.
  ///
  /// Returns `false` if the node was already completed.
  pub fn complete(&self, reason: WakeReason) -> bool {
    let next = match reason {
      | WakeReason::Signaled => STATE_SIGNALED,
      | WakeReason::Reset => STATE_RESET,
      | WakeReason::Timeout => STATE_TIMEOUT,
    };
    if self.state.compare_exchange(STATE_PENDING, next, Ordering::AcqRel, Ordering::Acquire).is_err() {
      return false;
    }
    self.thread.unpark();
    true
  }

  /// Reason delivered so far, if any.
  #[must_use]
  pub fn outcome(&self) -> Option<WakeReason> {
    match self.state.load(Ordering::Acquire) {
      | STATE_SIGNALED => Some(WakeReason::Signaled),
      | STATE_RESET => Some(WakeReason::Reset),
      | STATE_TIMEOUT => Some(WakeReason::Timeout),
      | _ => None,
    }
  }

  /// Parks the calling thread until the node completes or `deadline` passes.
  pub fn park_until(&self, deadline: Option<Instant>) {
    while self.outcome().is_none() {
      match deadline {
        | None => thread::park(),
        | Some(deadline) => {
          let now = Instant::now();
          if now >= deadline {
            return;
          }
          thread::park_timeout(deadline - now);
        },
      }
    }
  }
}
