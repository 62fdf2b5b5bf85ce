//! Core logger types and traits

pub mod checked_entry;
pub mod encoder;
pub mod encoding;
pub mod error;
pub mod field;
pub mod level;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod logging_core;
pub mod metrics;
pub mod observer;
pub mod sink;
pub mod tee;
pub mod timestamp;

pub use checked_entry::{CheckedEntry, Core};
pub use encoder::Encoder;
pub use encoding::{Encoding, EncodingSelector, EncodingSwitch};
pub use error::{LoggerError, Result};
pub use field::{Field, FieldValue};
pub use level::{AtomicLevel, LevelEnabler, LevelResolver};
pub use log_entry::{Caller, LogEntry};
pub use log_level::LogLevel;
pub use logger::{Logger, LoggerBuilder};
pub use logging_core::LoggingCore;
pub use metrics::LoggerMetrics;
pub use observer::Observer;
pub use sink::Sink;
pub use tee::TeeCore;
pub use timestamp::TimestampFormat;
