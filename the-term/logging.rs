use std::path::Path;

use eyre::Result;

/// `-v` count to log level: warn, info, debug, then trace.
pub fn level_filter(verbosity: u8) -> log::LevelFilter {
  match verbosity {
    0 => log::LevelFilter::Warn,
    1 => log::LevelFilter::Info,
    2 => log::LevelFilter::Debug,
    _ => log::LevelFilter::Trace,
  }
}

/// Logs go to a file; the terminal itself is owned by the UI.
pub fn setup(verbosity: u8, log_file: &Path) -> Result<()> {
  fern::Dispatch::new()
    .format(|out, message, record| {
      out.finish(format_args!(
        "{} {} [{}] {}",
        chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f"),
        record.target(),
        record.level(),
        message
      ))
    })
    .level(level_filter(verbosity))
    .chain(fern::log_file(log_file)?)
    .apply()?;
  Ok(())
}
