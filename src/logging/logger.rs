use crate::common::time::{Clock, SystemClock};
use crate::logging::level::Severity;
use crate::logging::record::LogRecord;
use crate::logging::sink::{Sink, StdoutSink};

/// Named logger with a fixed severity threshold.
///
/// Messages below the threshold are dropped before the clock is read;
/// admitted messages become exactly one line on the sink.
#[derive(Debug, Clone)]
pub struct Logger<S = StdoutSink, C = SystemClock> {
    name: String,
    threshold: Severity,
    sink: S,
    clock: C,
}

impl Logger {
    /// Logger writing to stdout with local wall-clock timestamps.
    /// `level` may be a `Severity` or free text; unknown text means INFO.
    pub fn new(name: impl Into<String>, level: impl Into<Severity>) -> Self {
        Self::with_output(name, level, StdoutSink, SystemClock)
    }
}

impl<S: Sink, C: Clock> Logger<S, C> {
    pub fn with_output(
        name: impl Into<String>,
        level: impl Into<Severity>,
        sink: S,
        clock: C,
    ) -> Self {
        Self {
            name: name.into(),
            threshold: level.into(),
            sink,
            clock,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn threshold(&self) -> Severity {
        self.threshold
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn error(&self, msg: &str) {
        self.log(Severity::Error, msg);
    }

    pub fn warn(&self, msg: &str) {
        self.log(Severity::Warn, msg);
    }

    pub fn info(&self, msg: &str) {
        self.log(Severity::Info, msg);
    }

    pub fn debug(&self, msg: &str) {
        self.log(Severity::Debug, msg);
    }

    // Only the four severity methods feed this path.
    fn log(&self, severity: Severity, msg: &str) {
        if !self.should_emit(severity) {
            return;
        }
        self.sink.write_line(&self.format(msg, severity));
    }

    pub fn should_emit(&self, severity: Severity) -> bool {
        self.threshold.admits(severity)
    }

    /// Render `msg` as a line stamped with the current clock reading
    pub fn format(&self, msg: &str, severity: Severity) -> String {
        LogRecord::new(self.clock.now(), severity, &self.name, msg).to_string()
    }
}
