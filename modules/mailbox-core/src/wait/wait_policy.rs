use core::time::Duration;


/// How long a data-moving operation may wait for a slot or a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WaitPolicy {
  /// Fail immediately with a timeout instead of blocking.
  NoWait,
  /// Block for at most the given duration.
  Timeout(Duration),
  /// Block until signaled or reset.
  Forever,
}

impl WaitPolicy {
  /// Never block.
  pub const IMMEDIATE: Self = Self::NoWait;
  /// Never time out.
  pub const INFINITE: Self = Self::Forever;

  /// Builds a bounded policy; a zero duration means [`WaitPolicy::NoWait`].
  #[must_use]
  pub const fn from_timeout(timeout: Duration) -> Self {
    if timeout.is_zero() {
      Self::NoWait
    } else {
      Self::Timeout(timeout)
    }
  }

  /// Whether the caller must not be suspended.
  #[must_use]
  pub const fn is_no_wait(&self) -> bool {
    match self {
      | Self::NoWait => true,
      | Self::Timeout(timeout) => timeout.is_zero(),
      | Self::Forever => false,
    }
  }

  /// Bounded wait duration, if any.
  #[must_use]
  pub const fn timeout(&self) -> Option<Duration> {
    match self {
      | Self::Timeout(timeout) => Some(*timeout),
      | Self::NoWait | Self::Forever => None,
    }
  }
}

impl From<Duration> for WaitPolicy {
  fn from(timeout: Duration) -> Self {
    Self::from_timeout(timeout)
  }
}

impl From<Option<Duration>> for WaitPolicy {
  /// `None` waits forever.
  fn from(timeout: Option<Duration>) -> Self {
    match timeout {
      | Some(timeout) => Self::from_timeout(timeout),
      | None => Self::Forever,
    }
  }
}
