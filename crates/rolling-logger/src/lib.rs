//! Rolling Logger
//!
//! `log` backend that keeps the most recent records in a circular buffer
//! and forwards every record to the browser console (stderr off-wasm).

use std::collections::VecDeque;
use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use parking_lot::Mutex;

/// Default number of records kept in memory
pub const DEFAULT_CAPACITY: usize = 200;

static GLOBAL: OnceLock<RollingLogger> = OnceLock::new();

/// A captured log record
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: Level,
    pub target: String,
    pub message: String,
}

impl LogEntry {
    pub fn line(&self) -> String {
        format!(
            "{} [{}] {}: {}",
            self.timestamp.format("%H:%M:%S%.3f"),
            self.level,
            self.target,
            self.message
        )
    }
}

pub struct RollingLogger {
    level: LevelFilter,
    capacity: usize,
    buffer: Mutex<VecDeque<LogEntry>>,
}

impl RollingLogger {
    pub fn new(level: LevelFilter, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            level,
            capacity,
            buffer: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    /// Snapshot of buffered records, oldest first
    pub fn recent(&self) -> Vec<LogEntry> {
        self.buffer.lock().iter().cloned().collect()
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn push(&self, entry: LogEntry) {
        let mut buffer = self.buffer.lock();
        if buffer.len() == self.capacity {
            buffer.pop_front();
        }
        buffer.push_back(entry);
    }
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let entry = LogEntry {
            timestamp: Utc::now(),
            level: record.level(),
            target: record.target().to_string(),
            message: record.args().to_string(),
        };
        emit(&entry);
        self.push(entry);
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn emit(entry: &LogEntry) {
    let line = entry.line().into();
    match entry.level {
        Level::Error => web_sys::console::error_1(&line),
        Level::Warn => web_sys::console::warn_1(&line),
        Level::Info => web_sys::console::info_1(&line),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(entry: &LogEntry) {
    eprintln!("{}", entry.line());
}

/// Install the process-wide logger
///
/// Fails if any logger has already been installed.
pub fn init(level: LevelFilter, capacity: usize) -> Result<&'static RollingLogger, SetLoggerError> {
    let logger = GLOBAL.get_or_init(|| RollingLogger::new(level, capacity));
    log::set_logger(logger)?;
    log::set_max_level(logger.level);
    Ok(logger)
}

/// The installed logger, if [`init`] ran
pub fn global() -> Option<&'static RollingLogger> {
    GLOBAL.get()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(logger: &RollingLogger, level: Level, message: &str) {
        logger.log(
            &Record::builder()
                .args(format_args!("{}", message))
                .level(level)
                .target("test")
                .build(),
        );
    }

    #[test]
    fn test_buffer_keeps_latest_records() {
        let logger = RollingLogger::new(LevelFilter::Trace, 3);
        for i in 0..5 {
            record(&logger, Level::Info, &format!("entry {}", i));
        }
        let messages: Vec<String> = logger.recent().into_iter().map(|e| e.message).collect();
        assert_eq!(messages, vec!["entry 2", "entry 3", "entry 4"]);
    }

    #[test]
    fn test_level_filter_drops_records() {
        let logger = RollingLogger::new(LevelFilter::Warn, 10);
        record(&logger, Level::Debug, "quiet");
        record(&logger, Level::Error, "loud");
        let recent = logger.recent();
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].level, Level::Error);
        assert_eq!(recent[0].target, "test");
    }

    #[test]
    fn test_zero_capacity_is_clamped() {
        let logger = RollingLogger::new(LevelFilter::Info, 0);
        assert_eq!(logger.capacity(), 1);
        record(&logger, Level::Info, "a");
        record(&logger, Level::Info, "b");
        assert_eq!(logger.recent().len(), 1);
        logger.clear();
        assert!(logger.recent().is_empty());
    }

    #[test]
    fn test_entry_line_format() {
        let logger = RollingLogger::new(LevelFilter::Info, 4);
        record(&logger, Level::Warn, "careful");
        let line = logger.recent()[0].line();
        assert!(line.contains("[WARN] test: careful"));
    }

    #[test]
    fn test_second_init_fails() {
        let first = init(LevelFilter::Info, 8);
        assert!(first.is_ok());
        assert!(global().is_some());
        assert!(init(LevelFilter::Info, 8).is_err());
    }
}
