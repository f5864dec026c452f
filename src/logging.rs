#![cfg(feature = "std")]

use log::{LevelFilter, Log, Metadata, Record};
use std::env;

/// Environment variable holding the log level (`error` .. `trace`, or `off`).
pub const LOG_ENV: &str = "TWENTY48_LOG";

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    // stderr keeps log lines out of the rendered grid and the `sim` JSON
    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{:<5} [{}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn level_from_env(default: LevelFilter) -> LevelFilter {
    env::var(LOG_ENV)
        .ok()
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(default)
}

/// Initialize logging with the level from `TWENTY48_LOG`, `info` if unset
/// or invalid.
pub fn init_logging() {
    init_logging_with_default(LevelFilter::Info);
}

/// Like [`init_logging`] with a caller-chosen fallback level. Installing a
/// second time only updates the level.
pub fn init_logging_with_default(default: LevelFilter) {
    let level = level_from_env(default);
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
}
