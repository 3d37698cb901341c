//! Two registers of the same width compared bit by bit.

use std::fmt;

use serde::{
  Deserialize,
  Serialize,
};
use smallvec::SmallVec;

use crate::{
  BitVector,
  Error,
  Result,
  codec::{
    self,
    Base,
  },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Row {
  Primary,
  Secondary,
}

impl Row {
  pub const ALL: [Row; 2] = [Row::Primary, Row::Secondary];

  #[must_use]
  pub const fn other(self) -> Self {
    match self {
      Self::Primary => Self::Secondary,
      Self::Secondary => Self::Primary,
    }
  }
}

impl fmt::Display for Row {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Primary => f.write_str("primary"),
      Self::Secondary => f.write_str("secondary"),
    }
  }
}

/// Positions where the two registers disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonMask {
  flags: SmallVec<[bool; 64]>,
}

impl ComparisonMask {
  pub fn between(primary: &BitVector, secondary: &BitVector) -> Self {
    Self {
      flags: primary
        .iter()
        .zip(secondary.iter())
        .map(|(a, b)| a != b)
        .collect(),
    }
  }

  pub fn get(&self, index: usize) -> bool {
    self.flags.get(index).copied().unwrap_or(false)
  }

  pub fn count(&self) -> usize {
    self.flags.iter().filter(|&&flag| flag).count()
  }

  pub fn as_slice(&self) -> &[bool] {
    &self.flags
  }
}

/// The primary and secondary registers plus the base both are shown in.
///
/// The comparison mask and numeric text are derived on every read, so they
/// always reflect the current bits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterPair {
  primary:   BitVector,
  secondary: BitVector,
  base:      Base,
}

impl RegisterPair {
  pub fn new(width: usize, base: Base) -> Result<Self> {
    let zeros = BitVector::zeros(width)?;
    Ok(Self {
      primary: zeros.clone(),
      secondary: zeros,
      base,
    })
  }

  pub fn width(&self) -> usize {
    self.primary.width()
  }

  pub fn base(&self) -> Base {
    self.base
  }

  pub fn register(&self, row: Row) -> &BitVector {
    match row {
      Row::Primary => &self.primary,
      Row::Secondary => &self.secondary,
    }
  }

  fn register_mut(&mut self, row: Row) -> &mut BitVector {
    match row {
      Row::Primary => &mut self.primary,
      Row::Secondary => &mut self.secondary,
    }
  }

  pub fn set_bit(&mut self, row: Row, index: usize, value: u8) -> Result<()> {
    self.register_mut(row).set(index, value)
  }

  pub fn toggle_bit(&mut self, row: Row, index: usize) -> Result<()> {
    self.register_mut(row).toggle(index)
  }

  /// Swaps in new contents for `row`. The width must match the pair.
  pub fn replace(&mut self, row: Row, bits: BitVector) -> Result<()> {
    if bits.width() != self.width() {
      return Err(Error::WidthMismatch {
        expected: self.width(),
        actual:   bits.width(),
      });
    }
    *self.register_mut(row) = bits;
    Ok(())
  }

  pub fn comparison_mask(&self) -> ComparisonMask {
    ComparisonMask::between(&self.primary, &self.secondary)
  }

  pub fn is_highlighted(&self, index: usize) -> bool {
    match (self.primary.get(index), self.secondary.get(index)) {
      (Ok(a), Ok(b)) => a != b,
      _ => false,
    }
  }

  pub fn differing_count(&self) -> usize {
    self.comparison_mask().count()
  }

  pub fn set_base(&mut self, base: Base) {
    self.base = base;
  }

  pub fn clear(&mut self, row: Row) {
    self.register_mut(row).clear();
  }

  pub fn invert(&mut self, row: Row) {
    let register = self.register_mut(row);
    *register = register.invert_all();
  }

  pub fn reverse(&mut self, row: Row) {
    let register = self.register_mut(row);
    *register = register.reverse_order();
  }

  pub fn numeric_display(&self, row: Row) -> String {
    codec::encode(self.register(row), self.base)
  }
}

#[cfg(test)]
mod test {
  use super::*;

  fn pair_with(primary: &[u8], secondary: &[u8]) -> RegisterPair {
    let mut pair = RegisterPair::new(primary.len(), Base::Hex).unwrap();
    pair
      .replace(Row::Primary, BitVector::from_bits(primary).unwrap())
      .unwrap();
    pair
      .replace(Row::Secondary, BitVector::from_bits(secondary).unwrap())
      .unwrap();
    pair
  }

  #[test]
  fn mask_flags_differing_positions() {
    let pair = pair_with(&[1, 0, 1, 0], &[0, 0, 1, 0]);
    assert_eq!(pair.comparison_mask().as_slice(), &[
      true, false, false, false
    ]);
    assert!(pair.is_highlighted(0));
    assert!(!pair.is_highlighted(2));
    assert!(!pair.is_highlighted(40));
    assert_eq!(pair.differing_count(), 1);
    assert_eq!(pair.numeric_display(Row::Primary), "0xa");
    assert_eq!(pair.numeric_display(Row::Secondary), "0x2");
  }

  #[test]
  fn mask_follows_every_mutation() {
    let mut pair = pair_with(&[0, 0, 0, 0], &[0, 0, 0, 0]);
    assert_eq!(pair.differing_count(), 0);

    pair.set_bit(Row::Secondary, 3, 1).unwrap();
    assert!(pair.is_highlighted(3));

    pair.invert(Row::Primary);
    assert_eq!(pair.comparison_mask().as_slice(), &[
      true, true, true, false
    ]);

    pair.clear(Row::Primary);
    pair.clear(Row::Secondary);
    assert_eq!(pair.differing_count(), 0);
  }

  #[test]
  fn invert_and_reverse_rows() {
    let mut pair = pair_with(&[0, 1, 1, 0], &[0, 0, 0, 1]);
    pair.invert(Row::Primary);
    pair.reverse(Row::Secondary);
    assert_eq!(pair.register(Row::Primary).to_string(), "1001");
    assert_eq!(pair.register(Row::Secondary).to_string(), "1000");
  }

  #[test]
  fn set_base_keeps_values() {
    let mut pair = pair_with(&[1, 1, 1, 1], &[0, 1, 0, 0]);
    for base in Base::ALL {
      pair.set_base(base);
      assert_eq!(pair.register(Row::Primary).to_integer(), 15);
      assert_eq!(pair.register(Row::Secondary).to_integer(), 4);
    }
    pair.set_base(Base::Oct);
    assert_eq!(pair.numeric_display(Row::Primary), "0o17");
    pair.set_base(Base::Dec);
    assert_eq!(pair.numeric_display(Row::Secondary), "4");
  }

  #[test]
  fn replace_checks_width() {
    let mut pair = RegisterPair::new(8, Base::Hex).unwrap();
    assert_eq!(
      pair.replace(Row::Primary, BitVector::zeros(4).unwrap()),
      Err(Error::WidthMismatch {
        expected: 8,
        actual:   4,
      })
    );
  }

  #[test]
  fn set_bit_failure_leaves_state() {
    let mut pair = pair_with(&[1, 0], &[0, 0]);
    assert_eq!(pair.set_bit(Row::Primary, 1, 7), Err(Error::InvalidBit(7)));
    assert_eq!(pair.register(Row::Primary).to_string(), "10");
  }

  #[test]
  fn rows() {
    assert_eq!(Row::Primary.other(), Row::Secondary);
    assert_eq!(Row::Secondary.other(), Row::Primary);
    assert_eq!(Row::Secondary.to_string(), "secondary");
  }
}
