
/// Circular sequence of message slots over a caller-owned buffer.
///
/// The ring never checks whether a slot is free or used: [`CapacityCounters`] gate every call,
/// so each operation reduces to one slot access plus cursor arithmetic.
///
/// [`CapacityCounters`]: crate::counters::CapacityCounters
#[derive(Debug)]
pub struct SlotRing<'a, T> {
  buffer: &'a mut [T],
  rd:     usize,
  wr:     usize,
}

impl<'a, T: Copy> SlotRing<'a, T> {
  /// Wraps `buffer` with both cursors at the origin.
  #[must_use]
  pub fn new(buffer: &'a mut [T]) -> Self {
    Self { buffer, rd: 0, wr: 0 }
  }

  /// Number of slots in the underlying buffer.
  #[must_use]
  pub fn capacity(&self) -> usize {
    self.buffer.len()
  }

  /// Offset of the next slot to be read.
  #[must_use]
  pub const fn read_cursor(&self) -> usize {
    self.rd
  }

  /// Offset of the next slot to be written at the tail.
  #[must_use]
  pub const fn write_cursor(&self) -> usize {
    self.wr
  }

  /// Stores `value` at the write cursor and advances it.
  pub fn write_at_tail(&mut self, value: T) {
    self.buffer[self.wr] = value;
    self.wr = self.advance(self.wr);
  }

  /// Steps the read cursor back one slot and stores `value` there, making it the next message read.
  pub fn write_at_head(&mut self, value: T) {
    self.rd = self.retreat(self.rd);
    self.buffer[self.rd] = value;
  }

  /// Returns the slot at the read cursor and advances it.
  pub fn read_from_head(&mut self) -> T {
    let value = self.buffer[self.rd];
    self.rd = self.advance(self.rd);
    value
  }

  /// Returns the slot at the read cursor without consuming it.
  #[must_use]
  pub fn peek_head(&self) -> T {
    self.buffer[self.rd]
  }

  /// Moves both cursors back to the origin. Slot contents are left as they are.
  pub fn rewind(&mut self) {
    self.rd = 0;
    self.wr = 0;
  }

  fn advance(&self, cursor: usize) -> usize {
    let next = cursor + 1;
    if next == self.buffer.len() {
      0
    } else {
      next
    }
  }

  fn retreat(&self, cursor: usize) -> usize {
    if cursor == 0 {
      self.buffer.len() - 1
    } else {
      cursor - 1
    }
  }
}
