#![deny(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![deny(clippy::redundant_clone)]
#![deny(clippy::needless_borrow)]
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::manual_let_else)]
#![deny(clippy::unused_self)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::print_stdout)]
#![deny(clippy::dbg_macro)]
#![deny(clippy::must_use_candidate)]
#![deny(clippy::clone_on_copy)]
#![deny(clippy::len_without_is_empty)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

//! std port of the cellex mailbox.
//!
//! Binds the [`WaitPrimitive`](cellex_mailbox_core_rs::WaitPrimitive) collaborator to OS threads:
//! a blocked caller parks itself with `std::thread::park_timeout` and is unparked by whoever
//! signals its queue entry. The global critical section comes from the `std` implementation of
//! the `critical-section` crate, which this crate enables.

/// Mailbox aliases bound to the parking wait primitive.
pub mod mailbox;
/// Thread-parking implementation of the wait primitive.
pub mod wait;

pub use cellex_mailbox_core_rs::{
  Mailbox, MailboxCore, MailboxError, MailboxSnapshot, MailboxState, ThreadQueue, WaitPolicy, WaitPrimitive, WakeReason,
};
pub use mailbox::StdMailbox;
pub use wait::{ParkThreadQueue, ParkWaitNode, ParkWaitPrimitive};

/// Prelude module that re-exports commonly used types and traits.
pub mod prelude {
  pub use cellex_mailbox_core_rs::prelude::*;

  pub use crate::{mailbox::StdMailbox, wait::ParkWaitPrimitive};
}
