use cellex_mailbox_core_rs::ThreadQueue;

use super::*;

#[test]
fn pending_ticket_settles_as_timeout_and_leaves_the_queue() {
  let mut queue = ParkThreadQueue::default();
  let ticket = ParkWaitPrimitive::enqueue(&mut queue);
  assert_eq!(queue.len(), 1);

  ParkWaitPrimitive::block(&ticket, Some(ParkWaitPrimitive::deadline_after(Duration::from_millis(5))));

  assert_eq!(ParkWaitPrimitive::settle(&mut queue, ticket), WakeReason::Timeout);
  assert!(queue.is_empty());
}

#[test]
fn signaled_ticket_reports_its_reason() {
  let mut queue = ParkThreadQueue::default();
  let ticket = ParkWaitPrimitive::enqueue(&mut queue);

  assert!(queue.wake_one(WakeReason::Reset));
  ParkWaitPrimitive::block(&ticket, None);

  assert_eq!(ParkWaitPrimitive::settle(&mut queue, ticket), WakeReason::Reset);
}

#[test]
fn oversized_timeout_has_no_deadline() {
  assert_eq!(ParkWaitPrimitive::deadline_after(Duration::MAX), None);
}
