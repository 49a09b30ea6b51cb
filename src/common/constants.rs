use crate::logging::level::Severity;

/// Threshold used when a level string matches no known token
pub const DEFAULT_SEVERITY: Severity = Severity::Info;

pub const LEVEL_SEPARATOR: &str = " - ";
