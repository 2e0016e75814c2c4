/// Reason code delivered to a thread when it leaves a wait queue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WakeReason {
  /// The condition the thread waited for may now hold; it must re-check it.
  Signaled,
  /// The mailbox was reset while the thread was waiting.
  Reset,
  /// The wait deadline elapsed before any signal arrived.
  Timeout,
}
