use thiserror::Error;

use crate::codec::Base;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  #[error("invalid bit value {0}, expected 0 or 1")]
  InvalidBit(u8),
  #[error("bit index {index} out of range for width {width}")]
  Index { index: usize, width: usize },
  #[error("invalid {base} digit {character:?}")]
  Parse { character: char, base: Base },
  #[error("value does not fit in {width} bits")]
  Overflow { width: usize },
  #[error("invalid argument: {0}")]
  InvalidArgument(String),
  #[error("register width {0} is not supported (expected 1..={max})", max = crate::MAX_WIDTH)]
  InvalidWidth(usize),
  #[error("register width mismatch: expected {expected}, got {actual}")]
  WidthMismatch { expected: usize, actual: usize },
  #[error("invalid bit range {0:?}")]
  InvalidRange(String),
}

pub type Result<T> = std::result::Result<T, Error>;
