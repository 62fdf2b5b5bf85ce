//! Severity gates
//!
//! A core combines two of them: a global [`LevelEnabler`] and a per-name
//! [`LevelResolver`]. Both must pass for a record to be emitted.

use super::log_level::LogLevel;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

/// Global enable check applied to every record
pub trait LevelEnabler: Send + Sync {
    fn enabled(&self, level: LogLevel) -> bool;
}

/// A level is a threshold: everything at or above it is enabled
impl LevelEnabler for LogLevel {
    fn enabled(&self, level: LogLevel) -> bool {
        self.enables(level)
    }
}

/// Maps a logger name to its minimum enabled level
pub trait LevelResolver: Send + Sync {
    fn level(&self, logger_name: &str) -> LogLevel;
}

/// Same level for every logger name
impl LevelResolver for LogLevel {
    fn level(&self, _logger_name: &str) -> LogLevel {
        *self
    }
}

impl<F> LevelResolver for F
where
    F: Fn(&str) -> LogLevel + Send + Sync,
{
    fn level(&self, logger_name: &str) -> LogLevel {
        self(logger_name)
    }
}

/// Shared, runtime adjustable level floor
///
/// # Example
///
/// ```
/// use multiformat_logger::{AtomicLevel, LevelEnabler, LogLevel};
///
/// let level = AtomicLevel::new(LogLevel::Info);
/// assert!(!level.enabled(LogLevel::Debug));
///
/// level.set_level(LogLevel::Debug);
/// assert!(level.enabled(LogLevel::Debug));
/// ```
#[derive(Debug, Clone)]
pub struct AtomicLevel {
    level: Arc<AtomicU8>,
}

impl AtomicLevel {
    pub fn new(level: LogLevel) -> Self {
        Self {
            level: Arc::new(AtomicU8::new(level as u8)),
        }
    }

    pub fn level(&self) -> LogLevel {
        let tag = self.level.load(Ordering::Relaxed);
        LogLevel::ALL
            .get(tag as usize)
            .copied()
            .unwrap_or_default()
    }

    pub fn set_level(&self, level: LogLevel) {
        self.level.store(level as u8, Ordering::Relaxed);
    }
}

impl Default for AtomicLevel {
    fn default() -> Self {
        Self::new(LogLevel::default())
    }
}

impl LevelEnabler for AtomicLevel {
    fn enabled(&self, level: LogLevel) -> bool {
        self.level().enables(level)
    }
}
