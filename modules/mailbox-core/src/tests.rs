//! Test doubles shared by the unit tests of this crate.

use core::{
  cell::{Cell, RefCell},
  time::Duration,
};
use std::{
  io::Write,
  sync::{Arc, Mutex},
  vec::Vec,
};

use tracing_subscriber::fmt::MakeWriter;

use crate::wait::{ThreadQueue, WaitPrimitive, WakeReason};

/// Queue that stands in for blocked threads by counting them and recording delivered reasons.
#[derive(Debug, Default)]
pub(crate) struct RecordingQueue {
  pub(crate) waiting:   usize,
  pub(crate) delivered: Vec<WakeReason>,
}

impl RecordingQueue {
  pub(crate) fn park(&mut self, count: usize) {
    self.waiting += count;
  }
}

impl ThreadQueue for RecordingQueue {
  fn wake_one(&mut self, reason: WakeReason) -> bool {
    if self.waiting == 0 {
      return false;
    }
    self.waiting -= 1;
    self.delivered.push(reason);
    true
  }

  fn len(&self) -> usize {
    self.waiting
  }
}

/// Wait primitive for a single-threaded test: every block returns at once and nothing ever
/// signals the ticket, so each wait settles as a timeout.
pub(crate) struct InstantTimeout;

impl WaitPrimitive for InstantTimeout {
  type Deadline = Duration;
  type Queue = RecordingQueue;
  type Ticket = ();

  fn deadline_after(timeout: Duration) -> Self::Deadline {
    timeout
  }

  fn enqueue(queue: &mut Self::Queue) -> Self::Ticket {
    queue.park(1);
  }

  fn block(_ticket: &Self::Ticket, _deadline: Option<Self::Deadline>) {}

  fn settle(queue: &mut Self::Queue, _ticket: Self::Ticket) -> WakeReason {
    queue.waiting -= 1;
    WakeReason::Timeout
  }
}

/// Deadline handed out by [`SignaledThenTimeout`]: the issue order and the requested timeout.
pub(crate) type IssuedDeadline = (usize, Duration);

thread_local! {
  static DEADLINES_ISSUED: Cell<usize> = const { Cell::new(0) };
  static SETTLE_CALLS: Cell<usize> = const { Cell::new(0) };
  static BLOCKED_UNTIL: RefCell<Vec<Option<IssuedDeadline>>> = const { RefCell::new(Vec::new()) };
}

/// Wait primitive whose first wakeup is a signal that finds the slot taken again, and whose
/// second wakeup is a timeout. Records the deadline passed to every `block`.
///
/// State is per test thread.
pub(crate) struct SignaledThenTimeout;

impl SignaledThenTimeout {
  pub(crate) fn deadlines_issued() -> usize {
    DEADLINES_ISSUED.with(Cell::get)
  }

  pub(crate) fn blocked_until() -> Vec<Option<IssuedDeadline>> {
    BLOCKED_UNTIL.with(|blocked| blocked.borrow().clone())
  }
}

impl WaitPrimitive for SignaledThenTimeout {
  type Deadline = IssuedDeadline;
  type Queue = RecordingQueue;
  type Ticket = ();

  fn deadline_after(timeout: Duration) -> Self::Deadline {
    let order = DEADLINES_ISSUED.with(|issued| {
      let order = issued.get();
      issued.set(order + 1);
      order
    });
    (order, timeout)
  }

  fn enqueue(queue: &mut Self::Queue) -> Self::Ticket {
    queue.park(1);
  }

  fn block(_ticket: &Self::Ticket, deadline: Option<Self::Deadline>) {
    BLOCKED_UNTIL.with(|blocked| blocked.borrow_mut().push(deadline));
  }

  fn settle(queue: &mut Self::Queue, _ticket: Self::Ticket) -> WakeReason {
    queue.waiting -= 1;
    let call = SETTLE_CALLS.with(|calls| {
      let call = calls.get();
      calls.set(call + 1);
      call
    });
    if call == 0 {
      WakeReason::Signaled
    } else {
      WakeReason::Timeout
    }
  }
}

/// Log sink collecting formatted tracing output.
#[derive(Clone, Default)]
pub(crate) struct CaptureWriter {
  buffer: Arc<Mutex<Vec<u8>>>,
}

impl CaptureWriter {
  pub(crate) fn contents(&self) -> String {
    String::from_utf8(self.buffer.lock().unwrap().clone()).unwrap()
  }
}

impl Write for CaptureWriter {
  fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
    self.buffer.lock().unwrap().extend_from_slice(buf);
    Ok(buf.len())
  }

  fn flush(&mut self) -> std::io::Result<()> {
    Ok(())
  }
}

impl<'a> MakeWriter<'a> for CaptureWriter {
  type Writer = CaptureWriter;

  fn make_writer(&'a self) -> Self::Writer {
    self.clone()
  }
}
