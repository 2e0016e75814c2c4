use cellex_mailbox_core_rs::Mailbox;

use crate::wait::ParkWaitPrimitive;

/// Mailbox whose blocking forms park the calling OS thread.
pub type StdMailbox<'a, T> = Mailbox<'a, T, ParkWaitPrimitive>;
