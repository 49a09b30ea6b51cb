pub mod level;
pub mod logger;
pub mod record;
pub mod sink;

pub use level::Severity;
pub use logger::Logger;
pub use record::LogRecord;
pub use sink::{MemorySink, Sink, StdoutSink};
