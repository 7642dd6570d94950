//! Logger setup for binaries

use chrono::Local;
use colored::*;
use env_logger::Builder;
use log::LevelFilter;
use std::io::Write;

/// Initialize the logger with timestamps and colored levels.
///
/// Defaults to `Info`; `RUST_LOG` overrides it.
pub fn init() {
    Builder::new()
        .format(|buf, record| {
            let level = match record.level() {
                log::Level::Error => record.level().to_string().red().bold(),
                log::Level::Warn => record.level().to_string().yellow().bold(),
                log::Level::Info => record.level().to_string().green(),
                log::Level::Debug => record.level().to_string().blue(),
                log::Level::Trace => record.level().to_string().purple(),
            };

            let message = match record.level() {
                log::Level::Error => record.args().to_string().red(),
                log::Level::Warn => record.args().to_string().yellow(),
                _ => record.args().to_string().normal(),
            };

            writeln!(
                buf,
                "{} [{}] - {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                level,
                message
            )
        })
        .filter(None, LevelFilter::Info)
        .parse_env("RUST_LOG")
        .init();
}
