//! Sink trait for rendered log output

use super::error::Result;

/// Destination for rendered records.
///
/// Shared by every core derived from the same root, so implementations must
/// make each `write` call atomic with respect to concurrent writers.
pub trait Sink: Send + Sync {
    /// Write one fully rendered record
    fn write(&self, buf: &[u8]) -> Result<()>;

    /// Flush buffered output to its final destination
    fn sync(&self) -> Result<()>;
}
