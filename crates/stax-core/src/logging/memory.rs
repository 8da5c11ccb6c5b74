//! Capturing logger

use parking_lot::Mutex;

use super::traits::{LogLevel, Logger};

/// A single captured log line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
}

/// Logger that keeps every entry in memory
///
/// Used by tests to assert that expected-absent and expected-conflict
/// conditions were reported.
#[derive(Debug, Default)]
pub struct MemoryLogger {
    entries: Mutex<Vec<LogEntry>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// All captured entries in order
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().clone()
    }

    /// Messages captured at exactly `level`
    pub fn messages(&self, level: LogLevel) -> Vec<String> {
        self.entries
            .lock()
            .iter()
            .filter(|e| e.level == level)
            .map(|e| e.message.clone())
            .collect()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.messages(LogLevel::Warn)
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}

impl Logger for MemoryLogger {
    fn log(&self, level: LogLevel, message: &str) {
        self.entries.lock().push(LogEntry {
            level,
            message: message.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_captures_by_level() {
        let logger = MemoryLogger::new();
        logger.info("starting");
        logger.warn("missing");
        crate::log_warn!(logger, "missing {}", "again");

        assert_eq!(logger.entries().len(), 3);
        assert_eq!(logger.warnings(), vec!["missing", "missing again"]);

        logger.clear();
        assert!(logger.entries().is_empty());
    }
}
