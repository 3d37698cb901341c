//! Terminal client for the-bits: two registers edited bit by bit.

mod config;
mod ctx;
mod input;
mod logging;
mod render;
mod terminal;
mod theme;

use std::{
  path::PathBuf,
  time::Duration,
};

use clap::Parser;
use crossterm::event::{
  self,
  Event,
};
use eyre::Result;
use the_bits::{
  Base,
  Controller,
};

use crate::{
  config::Config,
  ctx::Ctx,
  theme::Theme,
};

#[derive(Debug, Parser)]
#[command(name = "the-bits")]
#[command(about = "Edit and compare two binary registers")]
struct Cli {
  /// Register width in bits (1-128)
  #[arg(short, long)]
  width: Option<usize>,

  /// Numeric display base: hex, dec or oct
  #[arg(short, long)]
  base: Option<Base>,

  /// Config file to use instead of the default location
  #[arg(short, long, value_name = "FILE")]
  config: Option<PathBuf>,

  /// Log file to use instead of the default location
  #[arg(long, value_name = "FILE")]
  log: Option<PathBuf>,

  /// Increase log verbosity (-v info, -vv debug, -vvv trace)
  #[arg(short, long, action = clap::ArgAction::Count)]
  verbose: u8,
}

fn main() -> Result<()> {
  let cli = Cli::parse();

  the_bits_loader::initialize_config_file(cli.config.clone());
  the_bits_loader::initialize_log_file(cli.log.clone());
  let log_file = the_bits_loader::log_file();
  logging::setup(cli.verbose, &log_file)?;

  let config =
    Config::load(&the_bits_loader::config_file())?.with_overrides(cli.width, cli.base)?;
  log::info!("starting with {:?}", config.register);

  let controller = Controller::new(&config.register)?;
  let mut ctx = Ctx::new(controller, Theme::from_config(&config.theme));
  let mut terminal = terminal::Terminal::new()?;

  terminal.enter_raw_mode()?;
  render::render(&mut ctx, &mut terminal)?;
  ctx.needs_render = false;

  loop {
    if ctx.should_quit {
      break;
    }

    if event::poll(Duration::from_millis(100))? {
      match event::read()? {
        Event::Key(key) => input::handle_key(&mut ctx, key),
        Event::Resize(..) => {
          terminal.resized()?;
          ctx.needs_render = true;
        },
        _ => {},
      }
    }

    if ctx.needs_render {
      render::render(&mut ctx, &mut terminal)?;
      ctx.needs_render = false;
    }
  }

  terminal.leave_raw_mode()?;
  Ok(())
}
