//! Terminal abstraction using ratatui + crossterm backend.

use std::io::{
  self,
  Stdout,
};

use crossterm::{
  execute,
  terminal::{
    EnterAlternateScreen,
    LeaveAlternateScreen,
    disable_raw_mode,
    enable_raw_mode,
  },
};
use eyre::Result;
use ratatui::{
  Terminal as RatatuiTerminal,
  backend::CrosstermBackend,
};

pub struct Terminal {
  terminal: RatatuiTerminal<CrosstermBackend<Stdout>>,
  raw:      bool,
}

impl Terminal {
  pub fn new() -> Result<Self> {
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = RatatuiTerminal::new(backend)?;
    Ok(Self {
      terminal,
      raw: false,
    })
  }

  pub fn enter_raw_mode(&mut self) -> Result<()> {
    enable_raw_mode()?;
    self.raw = true;
    execute!(self.terminal.backend_mut(), EnterAlternateScreen)?;
    self.terminal.hide_cursor()?;
    Ok(())
  }

  pub fn leave_raw_mode(&mut self) -> Result<()> {
    if !self.raw {
      return Ok(());
    }
    self.raw = false;
    self.terminal.show_cursor()?;
    execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
    disable_raw_mode()?;
    Ok(())
  }

  pub fn draw<F>(&mut self, f: F) -> Result<()>
  where
    F: for<'a> FnOnce(&mut ratatui::Frame<'a>),
  {
    self.terminal.draw(f)?;
    Ok(())
  }

  /// Clears so the next draw repaints every cell.
  pub fn resized(&mut self) -> Result<()> {
    self.terminal.autoresize()?;
    self.terminal.clear()?;
    Ok(())
  }
}

impl Drop for Terminal {
  fn drop(&mut self) {
    if let Err(err) = self.leave_raw_mode() {
      log::error!("failed to restore terminal: {err}");
    }
  }
}
