use std::error::Error;
use std::fmt::{self, Display, Formatter};

/// The different kinds of errors the delta engine can return.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeltaErrorKind {
  /// The arguments passed to an operation were invalid: an overflowing
  /// arithmetic step, an out-of-range chunk, or an inconsistent
  /// empty-target diff.
  InvalidArgument,
  /// A caller-supplied destination buffer was too small to hold the
  /// result.
  BufferTooSmall,
  /// A wire-format buffer did not decode to a structurally valid diff.
  Corrupt,
}

/// The error type used in results for all delta engine operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeltaError {
  pub kind: DeltaErrorKind,
  pub message: String,
}

impl DeltaError {
  pub(crate) fn new<S: AsRef<str>>(kind: DeltaErrorKind, message: S) -> Self {
    DeltaError {
      kind,
      message: message.as_ref().to_string(),
    }
  }

  pub(crate) fn invalid_argument<S: AsRef<str>>(message: S) -> Self {
    Self::new(DeltaErrorKind::InvalidArgument, message)
  }

  pub(crate) fn buffer_too_small<S: AsRef<str>>(message: S) -> Self {
    Self::new(DeltaErrorKind::BufferTooSmall, message)
  }

  pub(crate) fn corrupt<S: AsRef<str>>(message: S) -> Self {
    Self::new(DeltaErrorKind::Corrupt, message)
  }
}

impl Display for DeltaError {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "gdsl delta {:?} error: {}", self.kind, &self.message)
  }
}

impl Error for DeltaError {}

pub type DeltaResult<T> = Result<T, DeltaError>;
