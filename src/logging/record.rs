use crate::common::constants::LEVEL_SEPARATOR;
use crate::common::time::Timestamp;
use crate::logging::level::Severity;
use std::fmt;

/// One log line before it is rendered
#[derive(Debug, Clone, Copy)]
pub struct LogRecord<'a> {
    pub timestamp: Timestamp,
    pub severity: Severity,
    pub name: &'a str,
    pub message: &'a str,
}

impl<'a> LogRecord<'a> {
    pub fn new(timestamp: Timestamp, severity: Severity, name: &'a str, message: &'a str) -> Self {
        Self {
            timestamp,
            severity,
            name,
            message,
        }
    }
}

impl fmt::Display for LogRecord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] [{}] {}{}{}",
            self.timestamp,
            self.severity.label(),
            self.name,
            LEVEL_SEPARATOR,
            self.message
        )
    }
}
