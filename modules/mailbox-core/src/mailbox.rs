mod insert_end;
mod mailbox_core;
mod mailbox_error;
mod mailbox_snapshot;
mod mailbox_state;
mod mailbox_struct;
mod wait_side;

pub(crate) use insert_end::InsertEnd;
pub use mailbox_core::MailboxCore;
pub use mailbox_error::MailboxError;
pub use mailbox_snapshot::MailboxSnapshot;
pub use mailbox_state::MailboxState;
pub use mailbox_struct::Mailbox;
pub(crate) use wait_side::WaitSide;
