//! Register colors, configurable through the `[theme]` table.

use std::str::FromStr;

use ratatui::style::{
  Color,
  Modifier,
  Style,
};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct ThemeConfig {
  pub set_bit:   String,
  pub differing: String,
  pub cursor:    String,
  pub error:     String,
}

impl Default for ThemeConfig {
  fn default() -> Self {
    Self {
      set_bit:   "cyan".into(),
      differing: "magenta".into(),
      cursor:    "yellow".into(),
      error:     "red".into(),
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
  pub set_bit:   Color,
  pub differing: Color,
  pub cursor:    Color,
  pub error:     Color,
}

impl Default for Theme {
  fn default() -> Self {
    Self {
      set_bit:   Color::Cyan,
      differing: Color::Magenta,
      cursor:    Color::Yellow,
      error:     Color::Red,
    }
  }
}

impl Theme {
  /// Unparseable color names fall back to the default color for that slot.
  pub fn from_config(config: &ThemeConfig) -> Self {
    let default = Self::default();
    Self {
      set_bit:   parse_color("set-bit", &config.set_bit, default.set_bit),
      differing: parse_color("differing", &config.differing, default.differing),
      cursor:    parse_color("cursor", &config.cursor, default.cursor),
      error:     parse_color("error", &config.error, default.error),
    }
  }

  pub fn set_bit(&self) -> Style {
    Style::default().fg(self.set_bit).add_modifier(Modifier::BOLD)
  }

  pub fn differing(&self) -> Style {
    Style::default().fg(self.differing).add_modifier(Modifier::BOLD)
  }

  pub fn cursor(&self) -> Style {
    Style::default().fg(Color::Black).bg(self.cursor)
  }

  pub fn error(&self) -> Style {
    Style::default().fg(self.error)
  }

  pub fn dim(&self) -> Style {
    Style::default().fg(Color::DarkGray)
  }
}

fn parse_color(key: &str, value: &str, fallback: Color) -> Color {
  match Color::from_str(value) {
    Ok(color) => color,
    Err(_) => {
      log::warn!("theme.{key}: unknown color {value:?}, using {fallback}");
      fallback
    },
  }
}
