use super::*;

#[test]
fn display_names_the_failed_outcome() {
  assert_eq!(MailboxError::Reset.to_string(), "mailbox is in reset state");
  assert_eq!(MailboxError::Timeout.to_string(), "mailbox operation timed out");
}

#[test]
fn converts_into_a_boxed_error() {
  let boxed: Box<dyn core::error::Error> = MailboxError::Timeout.into();
  assert_eq!(boxed.to_string(), "mailbox operation timed out");
}
