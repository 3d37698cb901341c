//! Textual encodings of register values.

use std::{
  fmt,
  str::FromStr,
};

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

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Base {
  #[default]
  Hex,
  Dec,
  Oct,
}

impl Base {
  pub const ALL: [Base; 3] = [Base::Hex, Base::Dec, Base::Oct];

  pub const fn radix(self) -> u32 {
    match self {
      Self::Hex => 16,
      Self::Dec => 10,
      Self::Oct => 8,
    }
  }

  /// Cycles hex -> dec -> oct -> hex.
  #[must_use]
  pub const fn next(self) -> Self {
    match self {
      Self::Hex => Self::Dec,
      Self::Dec => Self::Oct,
      Self::Oct => Self::Hex,
    }
  }

  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Hex => "hex",
      Self::Dec => "dec",
      Self::Oct => "oct",
    }
  }
}

impl fmt::Display for Base {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for Base {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    match s.trim().to_ascii_lowercase().as_str() {
      "hex" | "16" => Ok(Self::Hex),
      "dec" | "10" => Ok(Self::Dec),
      "oct" | "8" => Ok(Self::Oct),
      _ => Err(Error::InvalidArgument(format!("unknown base {s:?}"))),
    }
  }
}

pub fn encode(bits: &BitVector, base: Base) -> String {
  encode_value(bits.to_integer(), base)
}

/// Formats `value` with the base prefix and no leading zeros.
pub fn encode_value(value: u128, base: Base) -> String {
  match base {
    Base::Hex => format!("{value:#x}"),
    Base::Dec => value.to_string(),
    Base::Oct => format!("{value:#o}"),
  }
}

/// Parses user text into a register of `width` bits.
///
/// Surrounding whitespace is ignored and a `0x`/`0o` prefix is stripped
/// whatever `base` is. Empty text is zero.
pub fn decode(text: &str, base: Base, width: usize) -> Result<BitVector> {
  let value = parse_value(text, base, width)?;
  BitVector::from_integer(value, width)
}

fn parse_value(text: &str, base: Base, width: usize) -> Result<u128> {
  let digits = strip_prefix(text.trim());
  let radix = base.radix();

  let digits = digits
    .chars()
    .map(|character| {
      character
        .to_digit(radix)
        .ok_or(Error::Parse { character, base })
    })
    .collect::<Result<Vec<u32>>>()?;

  let value = digits
    .iter()
    .try_fold(0u128, |value, &digit| {
      value
        .checked_mul(radix as u128)?
        .checked_add(digit as u128)
    })
    .ok_or(Error::Overflow { width })?;

  if bits_required(value) > width {
    return Err(Error::Overflow { width });
  }
  Ok(value)
}

fn strip_prefix(text: &str) -> &str {
  ["0x", "0X", "0o", "0O"]
    .iter()
    .find_map(|prefix| text.strip_prefix(prefix))
    .unwrap_or(text)
}
