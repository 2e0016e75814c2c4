#![deny(missing_docs)]
#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![deny(clippy::redundant_clone)]
#![deny(clippy::redundant_field_names)]
#![deny(clippy::redundant_pattern)]
#![deny(clippy::redundant_static_lifetimes)]
#![deny(clippy::needless_borrow)]
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::manual_let_else)]
#![deny(clippy::unused_self)]
#![deny(clippy::unnecessary_wraps)]
#![deny(clippy::unreachable)]
#![deny(clippy::no_effect)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::print_stdout)]
#![deny(clippy::dbg_macro)]
#![deny(clippy::must_use_candidate)]
#![deny(clippy::trivially_copy_pass_by_ref)]
#![deny(clippy::clone_on_copy)]
#![deny(clippy::len_without_is_empty)]
#![deny(clippy::wrong_self_convention)]
#![deny(clippy::bool_comparison)]
#![deny(clippy::needless_bool)]
#![deny(clippy::match_like_matches_macro)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

//! Bounded blocking mailbox for real-time kernels.
//!
//! A mailbox is a fixed-capacity circular queue of word-sized messages living in a caller-supplied
//! buffer. Producers insert at the tail (`post`) or at the head (`post_ahead`), consumers remove
//! from the head (`fetch`). Every check-and-act sequence runs inside the global critical section
//! provided by the `critical-section` crate, so the same mailbox can be shared between threads and
//! interrupt handlers.
//!
//! Blocking is delegated to a [`WaitPrimitive`] supplied by the platform port; this crate only
//! sequences enqueue, block and wake calls around the critical section. The I-class entry points
//! (`*_i`) never block and expect the caller to already hold the critical section.

/// Capacity bookkeeping shared by the insert and remove paths.
pub mod counters;
/// Mailbox state machine and its critical-section facade.
pub mod mailbox;
/// Circular slot storage over a borrowed buffer.
pub mod ring;
/// Wait policies, wake reasons and the scheduler collaborator traits.
pub mod wait;

pub use counters::CapacityCounters;
pub use mailbox::{Mailbox, MailboxCore, MailboxError, MailboxSnapshot, MailboxState};
pub use ring::SlotRing;
pub use wait::{ThreadQueue, WaitPolicy, WaitPrimitive, WakeReason};

/// Prelude module that re-exports commonly used types and traits.
pub mod prelude {
  pub use crate::{
    mailbox::{Mailbox, MailboxCore, MailboxError, MailboxSnapshot, MailboxState},
    wait::{ThreadQueue, WaitPolicy, WaitPrimitive, WakeReason},
  };
}

#[cfg(test)]
mod tests;
