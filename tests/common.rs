// Shared helpers for logger integration tests

#![allow(dead_code)]

use levelog::common::time::{FixedClock, Timestamp};
use levelog::logging::{Logger, MemorySink, Severity};

pub const FIXED_PREFIX: &str = "[1984-05-07 03:09:05.008]";

/// Clock frozen at 1984-05-07 03:09:05.008
pub fn fixed_clock() -> FixedClock {
    FixedClock(Timestamp::new(1984, 5, 7, 3, 9, 5, 8))
}

/// Logger capturing its output in memory
pub fn capture_logger(name: &str, level: impl Into<Severity>) -> Logger<MemorySink, FixedClock> {
    Logger::with_output(name, level, MemorySink::new(), fixed_clock())
}

/// Call each emission method once, checking the running line count after every call
pub fn assert_emission_counts(logger: &Logger<MemorySink, FixedClock>, expected: [usize; 4]) {
    logger.error("error message");
    assert_eq!(logger.sink().len(), expected[0], "after error");
    logger.warn("warn message");
    assert_eq!(logger.sink().len(), expected[1], "after warn");
    logger.info("info message");
    assert_eq!(logger.sink().len(), expected[2], "after info");
    logger.debug("debug message");
    assert_eq!(logger.sink().len(), expected[3], "after debug");
}
