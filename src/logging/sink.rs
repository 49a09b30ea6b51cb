use std::io::{self, Write};
use std::sync::Mutex;

/// Destination for rendered log lines
pub trait Sink {
    /// Write one line; the sink appends the terminator
    fn write_line(&self, line: &str);
}

impl<S: Sink + ?Sized> Sink for &S {
    fn write_line(&self, line: &str) {
        (**self).write_line(line)
    }
}

/// Process standard output
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl Sink for StdoutSink {
    fn write_line(&self, line: &str) {
        let mut out = io::stdout().lock();
        // A closed or broken stdout is not reported to the caller.
        let _ = writeln!(out, "{}", line);
    }
}

/// Keeps every line in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the lines written so far
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn len(&self) -> usize {
        self.lines
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The lines joined as they would appear on a stream
    pub fn contents(&self) -> String {
        self.lines().iter().map(|line| format!("{}\n", line)).collect()
    }
}

impl Sink for MemorySink {
    fn write_line(&self, line: &str) {
        self.lines
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(line.to_string());
    }
}
