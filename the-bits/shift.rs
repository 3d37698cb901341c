//! Logical shifts on register values.

use serde::{
  Deserialize,
  Serialize,
};

use crate::{
  BitVector,
  Error,
  Result,
  bits::bits_required,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftDirection {
  Left,
  Right,
}

/// Shifts the value of `bits` by `amount` positions with zero fill.
///
/// A left shift that would push a set bit past the register width fails with
/// [`Error::Overflow`]; high bits are never discarded. A right shift by the
/// full width or more yields zero.
pub fn shift(bits: &BitVector, amount: i64, direction: ShiftDirection) -> Result<BitVector> {
  if amount < 0 {
    return Err(Error::InvalidArgument(format!(
      "shift amount must be non-negative, got {amount}"
    )));
  }

  let width = bits.width();
  let amount = usize::try_from(amount).unwrap_or(usize::MAX);
  let value = bits.to_integer();

  let shifted = match direction {
    ShiftDirection::Left if value == 0 => 0,
    ShiftDirection::Left => {
      if bits_required(value).saturating_add(amount) > width {
        return Err(Error::Overflow { width });
      }
      value << amount
    },
    ShiftDirection::Right if amount >= width => 0,
    ShiftDirection::Right => value >> amount,
  };

  BitVector::from_integer(shifted, width)
}
