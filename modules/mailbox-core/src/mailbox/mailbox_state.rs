/// Lifecycle state of a mailbox.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MailboxState {
  /// Normal operation.
  #[default]
  Active,
  /// Reset and rejecting traffic until resumed.
  Suspended,
}
