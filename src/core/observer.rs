//! Observer hooks around emission

use super::{checked_entry::CheckedEntry, field::Field, log_entry::LogEntry};

/// Inspects every record a core sees.
///
/// `check` fires for every gate check, including records that end up
/// filtered out. `write_entry` fires once per record that reached the sink.
/// Both default to no-ops.
pub trait Observer: Send + Sync {
    fn check(&self, _entry: &LogEntry, _checked: &CheckedEntry) {}

    fn write_entry(&self, _entry: &LogEntry, _fields: &[Field]) {}
}
