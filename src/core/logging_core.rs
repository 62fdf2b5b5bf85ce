//! Multi-encoding logging core
//!
//! `LoggingCore` owns one encoder per encoding and asks a shared selector
//! which one to use on every write. Scoped fields are folded into all of the
//! encoders, so they show up whichever encoding is active later on.

use super::{
    checked_entry::{CheckedEntry, Core},
    encoder::Encoder,
    encoding::{Encoding, EncodingSelector},
    error::{LoggerError, Result},
    field::Field,
    level::{LevelEnabler, LevelResolver},
    log_entry::LogEntry,
    log_level::LogLevel,
    observer::Observer,
    sink::Sink,
};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Severity-gated core writing through a per-write selected encoder.
///
/// Gate, resolver, selector, sink and observer are shared with every core
/// derived through [`LoggingCore::with_fields`]. The encoders are not: each
/// core owns its own set and never mutates it after construction, which is
/// what lets it be used from many threads without locking.
pub struct LoggingCore {
    enabler: Arc<dyn LevelEnabler>,
    levels: Arc<dyn LevelResolver>,
    encoders: HashMap<Encoding, Box<dyn Encoder>>,
    selector: Arc<dyn EncodingSelector>,
    sink: Arc<dyn Sink>,
    observer: Option<Arc<dyn Observer>>,
}

impl LoggingCore {
    /// Build a root core.
    ///
    /// Encodings missing from `encoders` are not rejected here; writing while
    /// the selector reports one fails with [`LoggerError::UnsupportedEncoding`].
    pub fn new(
        enabler: Arc<dyn LevelEnabler>,
        levels: Arc<dyn LevelResolver>,
        encoders: HashMap<Encoding, Box<dyn Encoder>>,
        selector: Arc<dyn EncodingSelector>,
        sink: Arc<dyn Sink>,
        observer: Option<Arc<dyn Observer>>,
    ) -> Self {
        Self {
            enabler,
            levels,
            encoders,
            selector,
            sink,
            observer,
        }
    }

    /// Derive a core whose encoders all carry `fields` on top of ours.
    ///
    /// Every encoder is cloned, not only the active one, because the selector
    /// may switch encodings after this call.
    #[must_use]
    pub fn with_fields(&self, fields: &[Field]) -> LoggingCore {
        let encoders = self
            .encoders
            .iter()
            .map(|(encoding, encoder)| {
                let mut clone = encoder.clone_encoder();
                clone.add_fields(fields);
                (*encoding, clone)
            })
            .collect();

        LoggingCore {
            enabler: Arc::clone(&self.enabler),
            levels: Arc::clone(&self.levels),
            encoders,
            selector: Arc::clone(&self.selector),
            sink: Arc::clone(&self.sink),
            observer: self.observer.clone(),
        }
    }

    /// Global gate AND the level resolved for `logger_name`
    pub fn should_emit(&self, level: LogLevel, logger_name: &str) -> bool {
        self.enabler.enabled(level) && self.levels.level(logger_name).enables(level)
    }

    /// Encoder configured for `encoding`, if any
    pub fn encoder(&self, encoding: Encoding) -> Option<&dyn Encoder> {
        self.encoders.get(&encoding).map(|encoder| encoder.as_ref())
    }

    /// Encodings this core can render, sorted
    pub fn encodings(&self) -> Vec<Encoding> {
        let mut encodings: Vec<_> = self.encoders.keys().copied().collect();
        encodings.sort();
        encodings
    }
}

impl Core for LoggingCore {
    fn enabled(&self, level: LogLevel) -> bool {
        self.enabler.enabled(level)
    }

    fn with(&self, fields: &[Field]) -> Arc<dyn Core> {
        Arc::new(self.with_fields(fields))
    }

    fn check(self: Arc<Self>, checked: CheckedEntry) -> CheckedEntry {
        if let Some(ref observer) = self.observer {
            observer.check(checked.entry(), &checked);
        }

        let entry = checked.entry();
        if self.should_emit(entry.level, &entry.logger_name) {
            return checked.add_core(self);
        }
        checked
    }

    fn write(&self, entry: &LogEntry, fields: &[Field]) -> Result<()> {
        let encoding = self.selector.encoding();
        let encoder = self
            .encoders
            .get(&encoding)
            .ok_or_else(|| LoggerError::unsupported_encoding(encoding))?;

        let buf = encoder.encode_entry(entry, fields)?;
        let written = self.sink.write(&buf);

        if entry.level.requires_sync() {
            // The caller is about to panic or exit; a failed flush must not
            // get in the way of that.
            let _ = self.sink.sync();
        }
        written?;

        if let Some(ref observer) = self.observer {
            observer.write_entry(entry, fields);
        }
        Ok(())
    }

    fn sync(&self) -> Result<()> {
        self.sink.sync()
    }
}

impl fmt::Debug for LoggingCore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggingCore")
            .field("encodings", &self.encodings())
            .field("selected", &self.selector.encoding())
            .field("observer", &self.observer.is_some())
            .finish()
    }
}
