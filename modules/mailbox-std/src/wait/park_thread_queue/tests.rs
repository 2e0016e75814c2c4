use super::*;

fn pending_nodes(count: usize) -> Vec<Arc<ParkWaitNode>> {
  (0..count).map(|_| Arc::new(ParkWaitNode::current())).collect()
}

#[test]
fn wake_one_completes_the_oldest_waiter() {
  let nodes = pending_nodes(2);
  let mut queue = ParkThreadQueue::default();
  nodes.iter().for_each(|node| queue.push(node.clone()));

  assert!(queue.wake_one(WakeReason::Signaled));

  assert_eq!(nodes[0].outcome(), Some(WakeReason::Signaled));
  assert_eq!(nodes[1].outcome(), None);
  assert_eq!(queue.len(), 1);
}

#[test]
fn wake_all_drains_the_queue() {
  let nodes = pending_nodes(3);
  let mut queue = ParkThreadQueue::default();
  nodes.iter().for_each(|node| queue.push(node.clone()));

  assert_eq!(queue.wake_all(WakeReason::Reset), 3);

  assert!(queue.is_empty());
  assert!(nodes.iter().all(|node| node.outcome() == Some(WakeReason::Reset)));
  assert!(!queue.wake_one(WakeReason::Signaled));
}

#[test]
fn remove_only_drops_the_given_node() {
  let nodes = pending_nodes(3);
  let mut queue = ParkThreadQueue::default();
  nodes.iter().for_each(|node| queue.push(node.clone()));

  assert!(queue.remove(&nodes[1]));
  assert!(!queue.remove(&nodes[1]));

  queue.wake_all(WakeReason::Signaled);
  assert_eq!(nodes[1].outcome(), None);
  assert_eq!(nodes[2].outcome(), Some(WakeReason::Signaled));
}
