use std::{
  sync::Arc,
  time::{Duration, Instant},
};

use cellex_mailbox_core_rs::{WaitPrimitive, WakeReason};

use super::{ParkThreadQueue, ParkWaitNode};

#[cfg(test)]
mod tests;

/// Wait primitive that parks OS threads.
///
/// Signals are only delivered inside the critical section, as is `settle`, so a node found pending
/// there can be dropped from its queue without racing a late wake-up.
#[derive(Clone, Copy, Debug, Default)]
pub struct ParkWaitPrimitive;

impl WaitPrimitive for ParkWaitPrimitive {
  /// `None` when the timeout lies beyond what `Instant` can represent.
  type Deadline = Option<Instant>;
  type Queue = ParkThreadQueue;
  type Ticket = Arc<ParkWaitNode>;

  fn deadline_after(timeout: Duration) -> Self::Deadline {
    Instant::now().checked_add(timeout)
  }

  fn enqueue(queue: &mut Self::Queue) -> Self::Ticket {
    let node = Arc::new(ParkWaitNode::current());
    queue.push(node.clone());
    node
  }

  fn block(ticket: &Self::Ticket, deadline: Option<Self::Deadline>) {
    tracing::trace!(thread = ?ticket.thread_id(), "parking mailbox waiter");
    ticket.park_until(deadline.flatten());
  }

  fn settle(queue: &mut Self::Queue, ticket: Self::Ticket) -> WakeReason {
    match ticket.outcome() {
      | Some(reason) => reason,
      | None => {
        queue.remove(&ticket);
        tracing::trace!(thread = ?ticket.thread_id(), "mailbox waiter gave up");
        WakeReason::Timeout
      },
    }
  }
}
