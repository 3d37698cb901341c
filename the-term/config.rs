use std::path::Path;

use eyre::{
  Result,
  WrapErr,
};
use serde::Deserialize;
use the_bits::{
  Base,
  RegisterConfig,
};

use crate::theme::ThemeConfig;

/// Typed view of the merged config.toml.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
  pub register: RegisterConfig,
  pub theme:    ThemeConfig,
}

impl Config {
  pub fn load(path: &Path) -> Result<Self> {
    let value = the_bits_loader::config::user_config(path)?;
    let config: Config = value
      .try_into()
      .wrap_err_with(|| format!("invalid config in {}", path.display()))?;
    Ok(config)
  }

  /// Applies command line overrides, then validates the result.
  pub fn with_overrides(mut self, width: Option<usize>, base: Option<Base>) -> Result<Self> {
    if let Some(width) = width {
      self.register.width = width;
    }
    if let Some(base) = base {
      self.register.base = base;
    }
    self.register.validate()?;
    Ok(self)
  }
}
