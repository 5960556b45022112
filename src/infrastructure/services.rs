use crate::domain::logging::{LogEntry, LogLevel, Logger, TimeProvider};
use chrono::{DateTime, Utc};
use std::io::Write;
use std::str::FromStr;
use std::sync::Mutex;

/// Environment variable selecting the console log level
pub const LOG_LEVEL_ENV: &str = "PRICE_CHART_LOG";

/// Logger writing formatted entries to stderr
pub struct ConsoleLogger {
    min_level: LogLevel,
    time_provider: SystemTimeProvider,
}

impl ConsoleLogger {
    pub fn new(min_level: LogLevel) -> Self {
        Self { min_level, time_provider: SystemTimeProvider::new() }
    }

    /// Level from `PRICE_CHART_LOG`, `Info` when unset or unparsable
    pub fn from_env() -> Self {
        let level = std::env::var(LOG_LEVEL_ENV)
            .ok()
            .and_then(|value| LogLevel::from_str(value.trim()).ok())
            .unwrap_or(LogLevel::Info);
        Self::new(level)
    }

    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, entry: LogEntry) {
        if entry.level < self.min_level {
            return;
        }
        let line = entry.format_line(&self.time_provider);
        let _ = writeln!(std::io::stderr().lock(), "{}", line);
    }
}

/// Logger keeping entries in memory, for hosts that display their own log panel
#[derive(Default)]
pub struct MemoryLogger {
    entries: Mutex<Vec<LogEntry>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().map(|entries| entries.clone()).unwrap_or_default()
    }

    pub fn messages_at(&self, level: LogLevel) -> Vec<String> {
        self.entries().into_iter().filter(|e| e.level == level).map(|e| e.message).collect()
    }
}

impl Logger for MemoryLogger {
    fn log(&self, entry: LogEntry) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push(entry);
        }
    }
}

/// Wall clock in UTC milliseconds
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeProvider;

impl SystemTimeProvider {
    pub fn new() -> Self {
        Self
    }
}

impl TimeProvider for SystemTimeProvider {
    fn current_timestamp(&self) -> u64 {
        Utc::now().timestamp_millis().max(0) as u64
    }

    fn format_timestamp(&self, timestamp: u64) -> String {
        DateTime::<Utc>::from_timestamp_millis(timestamp as i64)
            .map(|dt| dt.format("%H:%M:%S%.3f").to_string())
            .unwrap_or_else(|| format!("{:06}", timestamp))
    }
}
