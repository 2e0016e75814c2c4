/// End of the ring a producer writes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum InsertEnd {
  /// Behind every pending message.
  Tail,
  /// In front of every pending message.
  Head,
}
