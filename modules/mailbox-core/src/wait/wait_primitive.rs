use core::time::Duration;

use super::{ThreadQueue, WakeReason};

/// Thread blocking services provided by the platform scheduler.
///
/// The mailbox drives a blocking call as `enqueue` (inside the critical section), `block` (outside
/// it) and `settle` (inside it again). A signal delivered between `enqueue` and `settle` must never
/// be lost, and `settle` must remove a ticket that was never signaled from its queue.
pub trait WaitPrimitive {
  /// Per-condition queue of blocked threads.
  type Queue: ThreadQueue;
  /// Handle the blocked thread keeps for its queue entry.
  type Ticket;
  /// Absolute point in time bounding a wait.
  type Deadline: Copy;

  /// Deadline lying `timeout` from now.
  fn deadline_after(timeout: Duration) -> Self::Deadline;

  /// Registers the calling thread at the back of `queue`.
  fn enqueue(queue: &mut Self::Queue) -> Self::Ticket;

  /// Suspends the calling thread until `ticket` is signaled or `deadline` passes.
  ///
  /// Spurious returns are allowed; `settle` decides the outcome.
  fn block(ticket: &Self::Ticket, deadline: Option<Self::Deadline>);

  /// Consumes `ticket` and reports why the thread woke up.
  ///
  /// A ticket that is still pending is removed from `queue` and reported as
  /// [`WakeReason::Timeout`].
  fn settle(queue: &mut Self::Queue, ticket: Self::Ticket) -> WakeReason;
}
