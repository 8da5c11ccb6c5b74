//! Console logger implementation

use super::traits::{LogLevel, Logger};

/// A logger that writes to the console
///
/// Info goes to stdout, everything else to stderr. Debug lines are dropped
/// unless the logger was built with `verbose`.
#[derive(Debug, Clone)]
pub struct ConsoleLogger {
    prefix: String,
    min_level: LogLevel,
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleLogger {
    /// Create a console logger with the `[stax]` prefix, reporting info and above
    pub fn new() -> Self {
        Self {
            prefix: "[stax]".to_string(),
            min_level: LogLevel::Info,
        }
    }

    /// Create a console logger with a custom prefix
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            ..Self::new()
        }
    }

    /// Enable or disable debug output
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.min_level = if verbose { LogLevel::Debug } else { LogLevel::Info };
        self
    }

    /// Debug output requested through `STAX_DEBUG=1` or `STAX_DEBUG=true`
    pub fn debug_from_env() -> bool {
        std::env::var("STAX_DEBUG")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    }

    fn format(&self, level: LogLevel, message: &str) -> String {
        format!("{} {}: {}", self.prefix, level, message)
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, level: LogLevel, message: &str) {
        if !self.enabled(level) {
            return;
        }
        match level {
            LogLevel::Info => println!("{}", self.format(level, message)),
            _ => eprintln!("{}", self.format(level, message)),
        }
    }

    fn enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_logger_creation() {
        let logger = ConsoleLogger::new();
        assert_eq!(logger.prefix, "[stax]");
        assert!(!logger.enabled(LogLevel::Debug));

        let custom = ConsoleLogger::with_prefix("[deploy]").verbose(true);
        assert_eq!(custom.prefix, "[deploy]");
        assert!(custom.enabled(LogLevel::Debug));
    }

    #[test]
    fn test_format() {
        let logger = ConsoleLogger::new();
        assert_eq!(
            logger.format(LogLevel::Warn, "key pair missing"),
            "[stax] WARN: key pair missing"
        );
    }
}
