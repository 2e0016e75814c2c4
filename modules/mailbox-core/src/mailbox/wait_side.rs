/// Which of the two mailbox wait queues a thread blocks on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum WaitSide {
  /// Producers waiting for a free slot.
  Producers,
  /// Consumers waiting for a message.
  Consumers,
}
