use crate::common::constants::DEFAULT_SEVERITY;
use std::fmt;

/// Logging severity, also used as a logger's threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Verbose,
    Debug,
    Info,
    Warn,
    Error,
    Off,
}

// Indexed by discriminant: (canonical token, printed label, severity).
const SEVERITY_TOKENS: [(&str, &str, Severity); 6] = [
    ("verbose", "VERBOSE", Severity::Verbose),
    ("debug", "DEBUG", Severity::Debug),
    ("info", "INFO", Severity::Info),
    ("warn", "WARN", Severity::Warn),
    ("error", "ERROR", Severity::Error),
    ("off", "OFF", Severity::Off),
];

impl Severity {
    /// Canonical lower-case token
    pub fn as_str(&self) -> &'static str {
        SEVERITY_TOKENS[*self as usize].0
    }

    /// Token as printed in a log line
    pub fn label(&self) -> &'static str {
        SEVERITY_TOKENS[*self as usize].1
    }

    /// Case-insensitive match against the canonical tokens
    pub fn lookup(token: &str) -> Option<Severity> {
        SEVERITY_TOKENS
            .iter()
            .find(|(name, _, _)| name.eq_ignore_ascii_case(token))
            .map(|(_, _, severity)| *severity)
    }

    /// Resolve free text to a severity, falling back to INFO
    pub fn parse_or_default(token: &str) -> Severity {
        Self::lookup(token).unwrap_or(DEFAULT_SEVERITY)
    }

    /// Position in the filtering order; Verbose and Debug share a rank
    pub fn rank(&self) -> u8 {
        match self {
            Severity::Verbose | Severity::Debug => 0,
            Severity::Info => 1,
            Severity::Warn => 2,
            Severity::Error => 3,
            Severity::Off => 4,
        }
    }

    /// Whether a message at `severity` passes this threshold.
    /// OFF never passes, whether it is the threshold or the message.
    pub fn admits(&self, severity: Severity) -> bool {
        *self != Severity::Off && severity != Severity::Off && severity.rank() >= self.rank()
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for Severity {
    fn from(token: &str) -> Self {
        Severity::parse_or_default(token)
    }
}

impl From<String> for Severity {
    fn from(token: String) -> Self {
        Severity::parse_or_default(&token)
    }
}

impl From<&String> for Severity {
    fn from(token: &String) -> Self {
        Severity::parse_or_default(token)
    }
}
