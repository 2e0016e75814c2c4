#[cfg(test)]
mod tests;

/// Failure outcome of a data-moving mailbox operation.
///
/// A successful transfer is reported as `Ok`; these are the only two ways one can fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum MailboxError {
  /// The mailbox is suspended, or was reset while the caller waited.
  #[error("mailbox is in reset state")]
  Reset,
  /// No slot or message became available within the allowed wait.
  #[error("mailbox operation timed out")]
  Timeout,
}
