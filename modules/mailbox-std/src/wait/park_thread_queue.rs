use std::{collections::VecDeque, sync::Arc};

use cellex_mailbox_core_rs::{ThreadQueue, WakeReason};

use super::ParkWaitNode;

#[cfg(test)]
mod tests;

/// FIFO of parked threads, woken in the order they blocked.
#[derive(Debug, Default)]
pub struct ParkThreadQueue {
  waiters: VecDeque<Arc<ParkWaitNode>>,
}

impl ParkThreadQueue {
  /// Appends `node` behind every thread already waiting.
  pub fn push(&mut self, node: Arc<ParkWaitNode>) {
    self.waiters.push_back(node);
  }

  /// Drops `node` from the queue, returning whether it was present.
  pub fn remove(&mut self, node: &Arc<ParkWaitNode>) -> bool {
    match self.waiters.iter().position(|queued| Arc::ptr_eq(queued, node)) {
      | Some(index) => self.waiters.remove(index).is_some(),
      | None => false,
    }
  }
}

impl ThreadQueue for ParkThreadQueue {
  fn wake_one(&mut self, reason: WakeReason) -> bool {
    match self.waiters.pop_front() {
      | Some(node) => {
        node.complete(reason);
        true
      },
      | None => false,
    }
  }

  fn len(&self) -> usize {
    self.waiters.len()
  }
}
