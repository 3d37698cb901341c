use std::path::Path;

use eyre::{
  Result,
  WrapErr,
};

/// Default built-in config.toml.
pub fn default_config() -> Result<toml::Value> {
  let config_str = include_str!("config.toml");
  toml::from_str(config_str).wrap_err("failed to parse built-in config.toml")
}

/// User config.toml at `path`, merged onto the default config.
///
/// A missing file is not an error; the defaults are returned unchanged.
pub fn user_config(path: &Path) -> Result<toml::Value> {
  let default = default_config()?;

  let config = match std::fs::read_to_string(path) {
    Ok(config) => config,
    Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
      tracing::debug!("no user config at {}", path.display());
      return Ok(default);
    },
    Err(err) => {
      return Err(err).wrap_err_with(|| format!("failed to read {}", path.display()));
    },
  };

  let user: toml::Value =
    toml::from_str(&config).wrap_err_with(|| format!("failed to parse {}", path.display()))?;
  tracing::info!("loaded user config from {}", path.display());
  Ok(crate::merge_toml_values(default, user, 3))
}
