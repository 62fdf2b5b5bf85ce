//! Sink implementations

#[cfg(feature = "file")]
pub mod file;
pub mod writer;

#[cfg(feature = "file")]
pub use file::FileSink;
pub use writer::WriterSink;

pub use crate::core::Sink;
