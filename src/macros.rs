//! Logging macros for ergonomic log message formatting.
//!
//! Messages are formatted like `format!`, the call site is recorded as the
//! entry's caller, and an optional leading `[key => value, ...]` list adds
//! call-site fields.
//!
//! # Examples
//!
//! ```
//! use multiformat_logger::prelude::*;
//! use multiformat_logger::{info, warn};
//!
//! let logger = Logger::builder().sink(WriterSink::new(Vec::new())).build().unwrap();
//!
//! info!(logger, "Server started");
//!
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//!
//! warn!(logger, ["attempt" => 3, "peer" => "peer0.org1"], "Retrying connection");
//! ```

/// Build a `Vec<Field>` from `key => value` pairs.
///
/// ```
/// use multiformat_logger::fields;
///
/// let fields = fields!["channel" => "mychannel", "height" => 12];
/// assert_eq!(fields.len(), 2);
/// ```
#[macro_export]
macro_rules! fields {
    ($($key:expr => $value:expr),* $(,)?) => {
        vec![$($crate::Field::new($key, $value)),*]
    };
}

/// Log a message with automatic formatting.
///
/// # Examples
///
/// ```
/// # use multiformat_logger::prelude::*;
/// # let logger = Logger::builder().sink(WriterSink::new(Vec::new())).build().unwrap();
/// use multiformat_logger::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, ["code" => 500], "Request failed: {}", "timeout");
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, [$($key:expr => $value:expr),* $(,)?], $($arg:tt)+) => {
        $logger.log_entry(
            $crate::LogEntry::new($level, format!($($arg)+)).with_location(file!(), line!()),
            &$crate::fields![$($key => $value),*],
        )
    };
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log_entry(
            $crate::LogEntry::new($level, format!($($arg)+)).with_location(file!(), line!()),
            &[],
        )
    };
}

/// Log a trace-level message.
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Trace, $($arg)+)
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}
