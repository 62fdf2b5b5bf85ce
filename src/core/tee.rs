//! Fan-out over several cores

use super::{
    checked_entry::{CheckedEntry, Core},
    error::{LoggerError, Result},
    field::Field,
    log_entry::LogEntry,
    log_level::LogLevel,
};
use std::sync::Arc;

/// Sends each record to every child core that accepts it.
///
/// Children are checked in order and each one appends itself to the same
/// [`CheckedEntry`], so a record can end up in several sinks and encodings.
#[derive(Clone, Default)]
pub struct TeeCore {
    cores: Vec<Arc<dyn Core>>,
}

impl TeeCore {
    pub fn new(cores: Vec<Arc<dyn Core>>) -> Self {
        Self { cores }
    }

    pub fn len(&self) -> usize {
        self.cores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cores.is_empty()
    }
}

impl Core for TeeCore {
    fn enabled(&self, level: LogLevel) -> bool {
        self.cores.iter().any(|core| core.enabled(level))
    }

    fn with(&self, fields: &[Field]) -> Arc<dyn Core> {
        Arc::new(TeeCore {
            cores: self.cores.iter().map(|core| core.with(fields)).collect(),
        })
    }

    fn check(self: Arc<Self>, checked: CheckedEntry) -> CheckedEntry {
        self.cores
            .iter()
            .fold(checked, |checked, core| Arc::clone(core).check(checked))
    }

    fn write(&self, entry: &LogEntry, fields: &[Field]) -> Result<()> {
        let errors = self
            .cores
            .iter()
            .filter_map(|core| core.write(entry, fields).err())
            .collect();
        LoggerError::from_many(errors)
    }

    fn sync(&self) -> Result<()> {
        let errors = self
            .cores
            .iter()
            .filter_map(|core| core.sync().err())
            .collect();
        LoggerError::from_many(errors)
    }
}
