use serde::{
  Deserialize,
  Serialize,
};

use crate::{
  Result,
  bits::check_width,
  codec::Base,
  field::IndexOrder,
};

pub const DEFAULT_WIDTH: usize = 32;

/// Settings a [`crate::Controller`] is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct RegisterConfig {
  pub width:       usize,
  pub base:        Base,
  pub index_order: IndexOrder,
}

impl Default for RegisterConfig {
  fn default() -> Self {
    Self {
      width:       DEFAULT_WIDTH,
      base:        Base::Hex,
      index_order: IndexOrder::Lsb0,
    }
  }
}

impl RegisterConfig {
  pub fn validate(&self) -> Result<()> {
    check_width(self.width)
  }
}
