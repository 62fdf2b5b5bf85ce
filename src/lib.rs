//! # Multiformat Logger
//!
//! A logging core that picks its output encoding per write.
//!
//! ## Features
//!
//! - **Switchable Encodings**: Console, JSON and logfmt, chosen on every write
//!   through an [`EncodingSelector`]
//! - **Scoped Fields**: Fields added with [`Logger::with`] appear in every
//!   encoding, whichever one is active later
//! - **Per-Logger Levels**: A global floor combined with a per-name resolver
//! - **Observable**: An optional [`Observer`] sees every check and every write
//! - **Thread Safe**: Cores are immutable after construction and shared freely
//!
//! ## Example
//!
//! ```
//! use multiformat_logger::prelude::*;
//!
//! let switch = EncodingSwitch::new(Encoding::Console);
//! let logger = Logger::builder()
//!     .name("peer")
//!     .selector(switch.clone())
//!     .sink(WriterSink::stdout())
//!     .build()?;
//!
//! let channel = logger.with(&[Field::new("channel", "mychannel")]);
//! channel.info("joined");
//!
//! switch.set(Encoding::Json);
//! channel.info("now in JSON, still tagged with the channel");
//! # Ok::<(), LoggerError>(())
//! ```

pub mod config;
pub mod core;
pub mod encoders;
pub mod identity;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::config::{LoggerConfig, OutputTarget};
    pub use crate::core::{
        AtomicLevel, CheckedEntry, Core, Encoder, Encoding, EncodingSelector, EncodingSwitch,
        Field, FieldValue, LevelEnabler, LevelResolver, LogEntry, LogLevel, Logger, LoggerBuilder,
        LoggerError, LoggerMetrics, LoggingCore, Observer, Result, Sink, TeeCore, TimestampFormat,
    };
    pub use crate::encoders::{ConsoleEncoder, EncoderConfig, JsonEncoder, LogfmtEncoder};
    #[cfg(feature = "file")]
    pub use crate::sinks::FileSink;
    pub use crate::sinks::WriterSink;
}

pub use config::{LoggerConfig, OutputTarget};
pub use core::{
    AtomicLevel, Caller, CheckedEntry, Core, Encoder, Encoding, EncodingSelector, EncodingSwitch,
    Field, FieldValue, LevelEnabler, LevelResolver, LogEntry, LogLevel, Logger, LoggerBuilder,
    LoggerError, LoggerMetrics, LoggingCore, Observer, Result, Sink, TeeCore, TimestampFormat,
};
pub use encoders::{ConsoleEncoder, EncoderConfig, JsonEncoder, LogfmtEncoder};
#[cfg(feature = "file")]
pub use sinks::FileSink;
pub use sinks::WriterSink;
