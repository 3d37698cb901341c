//! Fixed-width bit vectors.
//!
//! Index 0 is the most significant bit, index `width - 1` the least
//! significant. The integer meaning of a vector is
//! `sum(bits[i] * 2^(width - 1 - i))`.

use std::fmt;

use smallvec::SmallVec;

use crate::{
  Error,
  MAX_WIDTH,
  Result,
};

/// Number of bits needed to represent `value` in unsigned binary.
pub const fn bits_required(value: u128) -> usize {
  (u128::BITS - value.leading_zeros()) as usize
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BitVector {
  bits: SmallVec<[bool; 64]>,
}

impl BitVector {
  pub fn zeros(width: usize) -> Result<Self> {
    check_width(width)?;
    Ok(Self {
      bits: smallvec::smallvec![false; width],
    })
  }

  /// Builds a vector of exactly `width` bits holding `value`, zero-padded on
  /// the most significant side.
  pub fn from_integer(value: u128, width: usize) -> Result<Self> {
    check_width(width)?;
    if bits_required(value) > width {
      return Err(Error::Overflow { width });
    }

    let bits = (0..width)
      .map(|index| (value >> (width - 1 - index)) & 1 == 1)
      .collect();
    Ok(Self { bits })
  }

  /// Builds a vector from explicit bit values, most significant first.
  pub fn from_bits(values: &[u8]) -> Result<Self> {
    check_width(values.len())?;
    let bits = values
      .iter()
      .map(|&value| bit_from_u8(value))
      .collect::<Result<_>>()?;
    Ok(Self { bits })
  }

  pub fn width(&self) -> usize {
    self.bits.len()
  }

  pub fn get(&self, index: usize) -> Result<u8> {
    self
      .bits
      .get(index)
      .map(|&bit| bit as u8)
      .ok_or(Error::Index {
        index,
        width: self.width(),
      })
  }

  pub fn set(&mut self, index: usize, value: u8) -> Result<()> {
    let width = self.width();
    let bit = self
      .bits
      .get_mut(index)
      .ok_or(Error::Index { index, width })?;
    *bit = bit_from_u8(value)?;
    Ok(())
  }

  pub fn toggle(&mut self, index: usize) -> Result<()> {
    let width = self.width();
    let bit = self
      .bits
      .get_mut(index)
      .ok_or(Error::Index { index, width })?;
    *bit = !*bit;
    Ok(())
  }

  /// Sets every bit to 0.
  pub fn clear(&mut self) {
    self.bits.fill(false);
  }

  pub fn to_integer(&self) -> u128 {
    self
      .bits
      .iter()
      .fold(0u128, |acc, &bit| (acc << 1) | bit as u128)
  }

  /// Mirrors the vector end to end. This is not a bitwise negation.
  #[must_use]
  pub fn reverse_order(&self) -> Self {
    Self {
      bits: self.bits.iter().rev().copied().collect(),
    }
  }

  /// One's complement of every bit.
  #[must_use]
  pub fn invert_all(&self) -> Self {
    Self {
      bits: self.bits.iter().map(|bit| !bit).collect(),
    }
  }

  pub fn iter(&self) -> impl DoubleEndedIterator<Item = u8> + ExactSizeIterator + '_ {
    self.bits.iter().map(|&bit| bit as u8)
  }

  pub fn count_ones(&self) -> usize {
    self.bits.iter().filter(|&&bit| bit).count()
  }

  pub fn is_zero(&self) -> bool {
    !self.bits.contains(&true)
  }
}

impl fmt::Display for BitVector {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for &bit in &self.bits {
      f.write_str(if bit { "1" } else { "0" })?;
    }
    Ok(())
  }
}

pub(crate) fn check_width(width: usize) -> Result<()> {
  if width == 0 || width > MAX_WIDTH {
    return Err(Error::InvalidWidth(width));
  }
  Ok(())
}

fn bit_from_u8(value: u8) -> Result<bool> {
  match value {
    0 => Ok(false),
    1 => Ok(true),
    other => Err(Error::InvalidBit(other)),
  }
}

#[cfg(test)]
mod test {
  use super::*;

  fn bits(values: &[u8]) -> BitVector {
    BitVector::from_bits(values).unwrap()
  }

  #[test]
  fn from_integer_pads_on_the_left() {
    let v = BitVector::from_integer(5, 8).unwrap();
    assert_eq!(v.to_string(), "00000101");
    assert_eq!(v.width(), 8);
    assert_eq!(v.to_integer(), 5);
  }

  #[test]
  fn from_integer_rejects_values_wider_than_width() {
    assert_eq!(
      BitVector::from_integer(0x10, 4),
      Err(Error::Overflow { width: 4 })
    );
    assert!(BitVector::from_integer(0xf, 4).is_ok());
    assert!(BitVector::from_integer(u128::MAX, 128).is_ok());
  }

  #[test]
  fn width_must_be_in_range() {
    assert_eq!(BitVector::zeros(0), Err(Error::InvalidWidth(0)));
    assert_eq!(BitVector::zeros(129), Err(Error::InvalidWidth(129)));
    assert_eq!(BitVector::from_bits(&[]), Err(Error::InvalidWidth(0)));
    assert!(BitVector::zeros(128).unwrap().is_zero());
  }

  #[test]
  fn index_zero_is_most_significant() {
    let v = bits(&[1, 0, 0, 0]);
    assert_eq!(v.to_integer(), 8);
    assert_eq!(v.get(0), Ok(1));
    assert_eq!(v.get(3), Ok(0));
  }

  #[test]
  fn get_out_of_range() {
    let v = BitVector::zeros(4).unwrap();
    assert_eq!(v.get(4), Err(Error::Index { index: 4, width: 4 }));
  }

  #[test]
  fn set_validates_value_and_index() {
    let mut v = BitVector::zeros(4).unwrap();
    v.set(2, 1).unwrap();
    assert_eq!(v.to_string(), "0010");
    assert_eq!(v.set(1, 2), Err(Error::InvalidBit(2)));
    assert_eq!(v.set(9, 1), Err(Error::Index { index: 9, width: 4 }));
    assert_eq!(v.to_string(), "0010");
  }

  #[test]
  fn from_bits_rejects_non_binary_values() {
    assert_eq!(BitVector::from_bits(&[0, 1, 3]), Err(Error::InvalidBit(3)));
  }

  #[test]
  fn toggle_flips_only_target() {
    let mut v = bits(&[0, 1, 1, 0]);
    v.toggle(0).unwrap();
    assert_eq!(v.to_string(), "1110");
    v.toggle(0).unwrap();
    assert_eq!(v.to_string(), "0110");
    assert_eq!(v.toggle(4), Err(Error::Index { index: 4, width: 4 }));
  }

  #[test]
  fn invert_and_reverse() {
    assert_eq!(bits(&[0, 1, 1, 0]).invert_all(), bits(&[1, 0, 0, 1]));
    assert_eq!(bits(&[0, 0, 0, 1]).reverse_order(), bits(&[1, 0, 0, 0]));
  }

  #[test]
  fn counts() {
    let v = bits(&[1, 0, 1, 1]);
    assert_eq!(v.count_ones(), 3);
    assert!(!v.is_zero());
    assert_eq!(v.iter().collect::<Vec<_>>(), vec![1, 0, 1, 1]);
  }

  #[test]
  fn bits_required_matches_binary_length() {
    assert_eq!(bits_required(0), 0);
    assert_eq!(bits_required(1), 1);
    assert_eq!(bits_required(0xff), 8);
    assert_eq!(bits_required(0x100), 9);
    assert_eq!(bits_required(u128::MAX), 128);
  }

  quickcheck::quickcheck! {
    fn invert_twice_is_identity(value: u128, width: u8) -> bool {
      let width = width as usize % MAX_WIDTH + 1;
      let v = truncated(value, width);
      v.invert_all().invert_all() == v
    }

    fn reverse_twice_is_identity(value: u128, width: u8) -> bool {
      let width = width as usize % MAX_WIDTH + 1;
      let v = truncated(value, width);
      v.reverse_order().reverse_order() == v
    }

    fn toggle_twice_restores_only_that_bit(value: u128, width: u8, index: u8) -> bool {
      let width = width as usize % MAX_WIDTH + 1;
      let index = index as usize % width;
      let original = truncated(value, width);
      let mut v = original.clone();
      v.toggle(index).unwrap();
      let flipped_once = (0..width).all(|i| (v.get(i) != original.get(i)) == (i == index));
      v.toggle(index).unwrap();
      flipped_once && v == original
    }
  }

  fn truncated(value: u128, width: usize) -> BitVector {
    let mask = if width == 128 { u128::MAX } else { (1u128 << width) - 1 };
    BitVector::from_integer(value & mask, width).unwrap()
  }
}
