//! The `Core` trait and the accumulator cores append themselves to

use super::{
    error::{LoggerError, Result},
    field::Field,
    log_entry::LogEntry,
    log_level::LogLevel,
};
use std::fmt;
use std::sync::Arc;

/// One link of an emission pipeline.
///
/// A record goes through two phases: [`Core::check`] decides whether the core
/// wants it (and registers the core in a [`CheckedEntry`]), then
/// [`CheckedEntry::write`] asks every registered core to render and write it.
pub trait Core: Send + Sync {
    /// Cheap global pre-check, without logger-name resolution
    fn enabled(&self, level: LogLevel) -> bool;

    /// Derive a core that adds `fields` to every future record.
    ///
    /// `self` is left untouched.
    fn with(&self, fields: &[Field]) -> Arc<dyn Core>;

    /// Append `self` to `checked` if the entry should be written by it
    fn check(self: Arc<Self>, checked: CheckedEntry) -> CheckedEntry;

    /// Render the entry with call-site `fields` and write it
    fn write(&self, entry: &LogEntry, fields: &[Field]) -> Result<()>;

    /// Flush whatever the core writes to
    fn sync(&self) -> Result<()>;
}

/// An entry plus every core that accepted it during the check phase
pub struct CheckedEntry {
    entry: LogEntry,
    cores: Vec<Arc<dyn Core>>,
}

impl CheckedEntry {
    pub fn new(entry: LogEntry) -> Self {
        Self {
            entry,
            cores: Vec::new(),
        }
    }

    pub fn entry(&self) -> &LogEntry {
        &self.entry
    }

    #[must_use]
    pub fn add_core(mut self, core: Arc<dyn Core>) -> Self {
        self.cores.push(core);
        self
    }

    /// Number of cores that will write this entry
    pub fn len(&self) -> usize {
        self.cores.len()
    }

    /// True when no core accepted the entry
    pub fn is_empty(&self) -> bool {
        self.cores.is_empty()
    }

    /// Write to every accepting core.
    ///
    /// A failing core does not stop the others; failures are returned
    /// together once all cores were tried.
    pub fn write(&self, fields: &[Field]) -> Result<()> {
        let errors = self
            .cores
            .iter()
            .filter_map(|core| core.write(&self.entry, fields).err())
            .collect();
        LoggerError::from_many(errors)
    }
}

impl fmt::Debug for CheckedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CheckedEntry")
            .field("entry", &self.entry)
            .field("cores", &self.cores.len())
            .finish()
    }
}
