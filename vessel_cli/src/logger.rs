//! Stderr logger for the CLI.
//!
//! Lines look like `[2026-01-01 12:00:00] INFO - vessel_cli: message`.
//! The level comes from `VESSEL_LOG` (error, warn, info, debug, trace),
//! defaulting to info.

use std::io::Write;

use chrono::Local;
use log::{LevelFilter, Metadata, Record, SetLoggerError};

/// Environment variable holding the log level
pub const LOG_ENV: &str = "VESSEL_LOG";

struct StderrLogger {
    level: LevelFilter,
}

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let mut stderr = std::io::stderr().lock();
        // A closed stderr is not worth aborting the run for
        let _ = writeln!(
            stderr,
            "[{}] {} - {}: {}",
            timestamp,
            record.level(),
            record.target(),
            record.args()
        );
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

/// Parse a level name, falling back to info for anything unrecognised.
pub fn parse_level(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|v| v.trim().parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Install the logger with the level from `VESSEL_LOG`.
pub fn init() -> Result<(), SetLoggerError> {
    let level = parse_level(std::env::var(LOG_ENV).ok().as_deref());
    log::set_boxed_logger(Box::new(StderrLogger { level }))?;
    log::set_max_level(level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level(None), LevelFilter::Info);
        assert_eq!(parse_level(Some("debug")), LevelFilter::Debug);
        assert_eq!(parse_level(Some(" WARN ")), LevelFilter::Warn);
        assert_eq!(parse_level(Some("verbose")), LevelFilter::Info);
    }

    #[test]
    fn test_enabled_respects_level() {
        let logger = StderrLogger { level: LevelFilter::Warn };
        let warn = Metadata::builder().level(log::Level::Warn).build();
        let info = Metadata::builder().level(log::Level::Info).build();
        assert!(log::Log::enabled(&logger, &warn));
        assert!(!log::Log::enabled(&logger, &info));
    }
}
