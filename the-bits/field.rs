//! Bit labels and field extraction.
//!
//! Columns are positions in a [`BitVector`] (column 0 is the most significant
//! bit). Labels are the numbers a user sees above each column and depend on
//! the [`IndexOrder`]. Ranges are written in labels, e.g. `7:0`.

use std::ops::RangeInclusive;

use serde::{
  Deserialize,
  Serialize,
};

use crate::{
  BitVector,
  Error,
  Result,
};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndexOrder {
  /// The least significant bit is labelled 0.
  #[default]
  Lsb0,
  /// The most significant bit is labelled 0.
  Msb0,
}

impl IndexOrder {
  pub const fn label(self, column: usize, width: usize) -> usize {
    match self {
      Self::Lsb0 => width - 1 - column,
      Self::Msb0 => column,
    }
  }

  /// Inverse of [`IndexOrder::label`]. The mapping is its own inverse.
  pub const fn column(self, label: usize, width: usize) -> usize {
    self.label(label, width)
  }

  #[must_use]
  pub const fn toggle(self) -> Self {
    match self {
      Self::Lsb0 => Self::Msb0,
      Self::Msb0 => Self::Lsb0,
    }
  }

  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Lsb0 => "LSB",
      Self::Msb0 => "MSB",
    }
  }
}

/// An inclusive span of bit labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitRange {
  first: usize,
  last:  usize,
}

impl BitRange {
  /// Parses `"n"` or `"a:b"` where both labels are decimal, below `width`
  /// and distinct. Either order is accepted.
  pub fn parse(text: &str, width: usize) -> Result<Self> {
    let invalid = || Error::InvalidRange(text.to_string());
    let parse_label = |part: &str| -> Result<usize> {
      part
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|&label| label < width)
        .ok_or_else(invalid)
    };

    let mut parts = text.trim().split(':');
    let first = parse_label(parts.next().unwrap_or_default())?;
    let range = match (parts.next(), parts.next()) {
      (None, _) => Self { first, last: first },
      (Some(last), None) => {
        let last = parse_label(last)?;
        if last == first {
          return Err(invalid());
        }
        Self { first, last }
      },
      (Some(_), Some(_)) => return Err(invalid()),
    };
    Ok(range)
  }

  pub fn single(label: usize) -> Self {
    Self {
      first: label,
      last:  label,
    }
  }

  pub fn new(first: usize, last: usize) -> Self {
    Self { first, last }
  }

  /// Columns covered by this range under `order`, left to right.
  pub fn columns(&self, order: IndexOrder, width: usize) -> RangeInclusive<usize> {
    let a = order.column(self.first, width);
    let b = order.column(self.last, width);
    a.min(b)..=a.max(b)
  }
}

/// Reads the columns covered by `range` as one unsigned number, leftmost
/// column most significant.
pub fn extract(bits: &BitVector, range: &BitRange, order: IndexOrder) -> Result<u128> {
  let width = bits.width();
  if range.first.max(range.last) >= width {
    return Err(Error::InvalidRange(format!(
      "{}:{}",
      range.first, range.last
    )));
  }

  range
    .columns(order, width)
    .try_fold(0u128, |acc, column| -> Result<u128> {
      Ok((acc << 1) | bits.get(column)? as u128)
    })
}
