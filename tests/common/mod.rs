//! Test doubles shared by the integration tests

#![allow(dead_code)]

use multiformat_logger::prelude::*;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Sink recording every write and counting syncs
#[derive(Default)]
pub struct RecordingSink {
    records: Mutex<Vec<Vec<u8>>>,
    syncs: AtomicUsize,
    pub fail_writes: bool,
    pub fail_syncs: bool,
}

impl RecordingSink {
    pub fn failing_syncs() -> Self {
        Self {
            fail_syncs: true,
            ..Default::default()
        }
    }

    pub fn failing_writes() -> Self {
        Self {
            fail_writes: true,
            ..Default::default()
        }
    }

    pub fn lines(&self) -> Vec<String> {
        self.records
            .lock()
            .iter()
            .map(|r| String::from_utf8_lossy(r).into_owned())
            .collect()
    }

    pub fn writes(&self) -> usize {
        self.records.lock().len()
    }

    pub fn syncs(&self) -> usize {
        self.syncs.load(Ordering::SeqCst)
    }
}

impl Sink for RecordingSink {
    fn write(&self, buf: &[u8]) -> Result<()> {
        if self.fail_writes {
            return Err(LoggerError::writer("write rejected"));
        }
        self.records.lock().push(buf.to_vec());
        Ok(())
    }

    fn sync(&self) -> Result<()> {
        self.syncs.fetch_add(1, Ordering::SeqCst);
        if self.fail_syncs {
            return Err(LoggerError::writer("sync failed"));
        }
        Ok(())
    }
}

/// Observer counting both hooks
#[derive(Default)]
pub struct CountingObserver {
    checks: AtomicUsize,
    writes: AtomicUsize,
}

impl CountingObserver {
    pub fn checks(&self) -> usize {
        self.checks.load(Ordering::SeqCst)
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl Observer for CountingObserver {
    fn check(&self, _entry: &LogEntry, _checked: &CheckedEntry) {
        self.checks.fetch_add(1, Ordering::SeqCst);
    }

    fn write_entry(&self, _entry: &LogEntry, _fields: &[Field]) {
        self.writes.fetch_add(1, Ordering::SeqCst);
    }
}

/// Encoder that never renders
pub struct FailingEncoder;

impl Encoder for FailingEncoder {
    fn clone_encoder(&self) -> Box<dyn Encoder> {
        Box::new(FailingEncoder)
    }

    fn add_fields(&mut self, _fields: &[Field]) {}

    fn encode_entry(&self, _entry: &LogEntry, _fields: &[Field]) -> Result<Vec<u8>> {
        Err(LoggerError::formatter("failing", "refusing to render"))
    }
}
