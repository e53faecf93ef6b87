use std::{
    io::{self, Write as _},
    sync::{OnceLock, RwLock},
};

use colored::{Color, Colorize as _};
use log::{Log, Metadata, Record};

static LOGGER: OnceLock<AppLogger> = OnceLock::new();

pub fn get_logger() -> &'static AppLogger {
    // default configuration
    const DEFAULT_LEVEL: log::Level = log::Level::Warn;

    LOGGER.get_or_init(|| AppLogger::new(DEFAULT_LEVEL))
}

/// Installs the logger, lets through everything up to `level`.
///
/// Calling it again only changes the level.
pub fn init(level: log::Level) {
    let logger = get_logger();
    logger.set_min_level(level);

    if log::set_logger(logger).is_ok() {
        log::set_max_level(log::LevelFilter::Trace);
    }
}

/// Raises `base` by one level per `verbose` step, `Trace` at most.
pub fn verbosity(base: log::Level, verbose: u8) -> log::Level {
    const ORDER: [log::Level; 5] = [
        log::Level::Error,
        log::Level::Warn,
        log::Level::Info,
        log::Level::Debug,
        log::Level::Trace,
    ];

    let idx = base as usize - 1 + verbose as usize;
    ORDER[idx.min(ORDER.len() - 1)]
}

/// Writes records to stderr as `LEVEL source -> message`.
pub struct AppLogger {
    min_level: RwLock<log::Level>,
}

impl AppLogger {
    fn new(min_level: log::Level) -> Self {
        Self {
            min_level: RwLock::new(min_level),
        }
    }

    pub fn min_level(&self) -> log::Level {
        // a poisoned lock still holds a valid level
        *self.min_level.read().unwrap_or_else(|err| err.into_inner())
    }

    pub fn set_min_level(&self, level: log::Level) {
        *self.min_level.write().unwrap_or_else(|err| err.into_inner()) = level;
    }

    fn format(record: &Record) -> String {
        let color = match record.level() {
            log::Level::Error => Color::Red,
            log::Level::Warn => Color::Yellow,
            log::Level::Info => Color::White,
            log::Level::Debug => Color::Blue,
            log::Level::Trace => Color::BrightBlack,
        };

        format!(
            "{} {} -> {}",
            format!("{:>5}", record.level().as_str()).color(color),
            record.module_path().unwrap_or("unknown").dimmed(),
            record.args()
        )
    }
}

impl Log for AppLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.min_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let _ = writeln!(io::stderr().lock(), "{}", Self::format(record));
        }
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_steps() {
        assert_eq!(verbosity(log::Level::Warn, 0), log::Level::Warn);
        assert_eq!(verbosity(log::Level::Warn, 1), log::Level::Info);
        assert_eq!(verbosity(log::Level::Warn, 2), log::Level::Debug);
        assert_eq!(verbosity(log::Level::Warn, 9), log::Level::Trace);
        assert_eq!(verbosity(log::Level::Error, 0), log::Level::Error);
    }

    #[test]
    fn level_filter() {
        let logger = AppLogger::new(log::Level::Info);
        let info = Metadata::builder().level(log::Level::Info).build();
        let debug = Metadata::builder().level(log::Level::Debug).build();

        assert!(logger.enabled(&info));
        assert!(!logger.enabled(&debug));

        logger.set_min_level(log::Level::Debug);
        assert!(logger.enabled(&debug));
    }

    #[test]
    fn format_record() {
        colored::control::set_override(false);
        let line = AppLogger::format(
            &Record::builder()
                .args(format_args!("hello"))
                .level(log::Level::Warn)
                .module_path(Some("primaze::app"))
                .build(),
        );
        assert_eq!(line, " WARN primaze::app -> hello");
    }
}
