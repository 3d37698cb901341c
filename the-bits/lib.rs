//! Register comparison core.
//!
//! Two fixed-width registers are edited bit by bit or through their numeric
//! text, shown in hex, decimal or octal, and compared position by position.
//! Presentation layers drive everything through [`Controller`].

pub mod bits;
pub mod codec;
pub mod config;
pub mod controller;
pub mod error;
pub mod field;
pub mod pair;
pub mod shift;

pub use bits::BitVector;
pub use codec::Base;
pub use config::RegisterConfig;
pub use controller::{
  Controller,
  Intent,
};
pub use error::{
  Error,
  Result,
};
pub use field::{
  BitRange,
  IndexOrder,
};
pub use pair::{
  ComparisonMask,
  RegisterPair,
  Row,
};
pub use shift::ShiftDirection;

/// Widest register supported.
pub const MAX_WIDTH: usize = u128::BITS as usize;
