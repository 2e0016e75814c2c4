use super::WakeReason;

/// Queue of threads blocked on one mailbox condition.
///
/// Implementations are only ever touched inside the critical section. A mailbox owns two of them:
/// producers waiting for a free slot and consumers waiting for a message.
pub trait ThreadQueue: Default {
  /// Dequeues a single waiter and delivers `reason` to it.
  ///
  /// Returns `false` when the queue was empty.
  fn wake_one(&mut self, reason: WakeReason) -> bool;

  /// Dequeues every waiter, delivering `reason` to each, and returns how many were woken.
  fn wake_all(&mut self, reason: WakeReason) -> usize {
    let mut woken = 0;
    while self.wake_one(reason) {
      woken += 1;
    }
    woken
  }

  /// Number of threads currently enqueued.
  fn len(&self) -> usize;

  /// Whether no thread is enqueued.
  fn is_empty(&self) -> bool {
    self.len() == 0
  }
}
