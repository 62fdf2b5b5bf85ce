//! Stress tests for concurrent emission
//!
//! These tests verify:
//! - Records from many threads never interleave within a line
//! - Flipping the encoding mid-stream only changes whole records
//! - Scoped loggers stay isolated under concurrent derivation
//! - Panic-level records always sync, however busy the sink is

mod common;

use common::{CountingObserver, RecordingSink};
use multiformat_logger::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tempfile::TempDir;

const THREADS: usize = 8;
const PER_THREAD: usize = 200;

/// Every line is either a complete JSON object or a complete logfmt record
fn assert_whole_record(line: &str) {
    if line.starts_with('{') {
        let parsed: serde_json::Value =
            serde_json::from_str(line).unwrap_or_else(|e| panic!("torn JSON record {:?}: {}", line, e));
        assert!(parsed["worker"].is_i64(), "scoped field missing: {}", line);
    } else {
        assert!(line.starts_with("time="), "unexpected record: {:?}", line);
        assert!(line.contains(" worker="), "scoped field missing: {}", line);
    }
}

/// Test concurrent writers through scoped loggers while the encoding flips
#[test]
fn test_concurrent_writes_with_encoding_flips() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("concurrent.log");

    let switch = EncodingSwitch::new(Encoding::Json);
    let logger = Logger::builder()
        .name("stress")
        .selector(switch.clone())
        .sink(FileSink::new(&log_file).expect("Failed to create sink"))
        .build()
        .expect("Failed to build logger");

    let done = Arc::new(AtomicBool::new(false));
    let flipper = {
        let switch = switch.clone();
        let done = Arc::clone(&done);
        std::thread::spawn(move || {
            let mut flips = 0usize;
            while !done.load(Ordering::Relaxed) {
                let next = if switch.get() == Encoding::Json {
                    Encoding::Logfmt
                } else {
                    Encoding::Json
                };
                switch.set(next);
                flips += 1;
                std::thread::yield_now();
            }
            flips
        })
    };

    let mut handles = vec![];
    for worker in 0..THREADS {
        let scoped = logger
            .named(&format!("w{}", worker))
            .with(&[Field::new("worker", worker as i64)]);

        handles.push(std::thread::spawn(move || {
            for i in 0..PER_THREAD {
                scoped.log_with_fields(
                    LogLevel::Info,
                    format!("record {} from worker {}", i, worker),
                    &[Field::new("seq", i as i64)],
                );
            }
        }));
    }

    for handle in handles {
        handle.join().expect("Thread panicked");
    }
    done.store(true, Ordering::Relaxed);
    assert!(flipper.join().expect("Flipper panicked") > 0);

    logger.sync().expect("Failed to sync");
    assert_eq!(logger.metrics().total_logged(), (THREADS * PER_THREAD) as u64);
    assert_eq!(logger.metrics().dropped_count(), 0);

    let content = std::fs::read_to_string(&log_file).expect("Failed to read log file");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), THREADS * PER_THREAD);
    for line in lines {
        assert_whole_record(line);
    }
}

/// Test that concurrent derivation never leaks fields into siblings or the root
#[test]
fn test_concurrent_derivation_isolation() {
    let sink = Arc::new(RecordingSink::default());
    let logger = Logger::builder()
        .encoding(Encoding::Json)
        .shared_sink(sink.clone())
        .build()
        .unwrap();

    let mut handles = vec![];
    for worker in 0..THREADS {
        let logger = logger.clone();
        handles.push(std::thread::spawn(move || {
            for i in 0..50 {
                let key = format!("k{}_{}", worker, i);
                logger.with(&[Field::new(key.as_str(), true)]).info("scoped");
                logger.info("root");
            }
        }));
    }
    for handle in handles {
        handle.join().expect("Thread panicked");
    }

    let lines = sink.lines();
    assert_eq!(lines.len(), THREADS * 100);
    for line in lines {
        let parsed: serde_json::Value = serde_json::from_str(&line).unwrap();
        let extra = parsed
            .as_object()
            .unwrap()
            .keys()
            .filter(|k| k.starts_with('k'))
            .count();
        if parsed["msg"] == "root" {
            assert_eq!(extra, 0, "root record carries scoped field: {}", line);
        } else {
            assert_eq!(extra, 1, "scoped record has foreign fields: {}", line);
        }
    }
}

/// Stress test with rapid bursts, each closed by a panic-level record
#[test]
fn test_rapid_burst_sync_accounting() {
    let sink = Arc::new(RecordingSink::failing_syncs());
    let observer = Arc::new(CountingObserver::default());
    let logger = Logger::builder()
        .min_level(LogLevel::Trace)
        .shared_sink(sink.clone())
        .shared_observer(observer.clone())
        .build()
        .unwrap();

    let mut handles = vec![];
    for burst in 0..4 {
        let logger = logger.named(&format!("burst{}", burst));
        handles.push(std::thread::spawn(move || {
            for i in 0..25 {
                logger.trace(format!("Burst {} trace {}", burst, i));
            }
            logger.log(LogLevel::Panic, format!("Burst {} complete", burst));
        }));
    }
    for handle in handles {
        handle.join().expect("Thread panicked");
    }

    // failed syncs on the panic path are swallowed
    assert_eq!(sink.syncs(), 4);
    assert_eq!(sink.writes(), 4 * 26);
    assert_eq!(observer.checks(), 4 * 26);
    assert_eq!(observer.writes(), 4 * 26);
    assert_eq!(logger.metrics().dropped_count(), 0);

    let lines = sink.lines();
    for burst in 0..4 {
        assert!(
            lines.iter().any(|l| l.contains(&format!("Burst {} complete", burst))),
            "Burst {} completion marker missing!",
            burst
        );
    }
}

/// Test loggers shared across tasks of a multi-threaded runtime
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_logging_from_async_tasks() {
    let sink = Arc::new(RecordingSink::default());
    let switch = EncodingSwitch::new(Encoding::Logfmt);
    let logger = Logger::builder()
        .name("rt")
        .selector(switch.clone())
        .shared_sink(sink.clone())
        .build()
        .unwrap();

    let mut tasks = vec![];
    for task in 0..16i64 {
        let logger = logger.named("task").with(&[Field::new("worker", task)]);
        let switch = switch.clone();
        tasks.push(tokio::spawn(async move {
            for i in 0..20 {
                if i == 10 && task % 2 == 0 {
                    switch.set(Encoding::Json);
                }
                logger.warn(format!("tick {}", i));
                tokio::task::yield_now().await;
            }
        }));
    }
    for task in tasks {
        task.await.expect("Task panicked");
    }

    let lines = sink.lines();
    assert_eq!(lines.len(), 16 * 20);
    for line in &lines {
        assert_eq!(line.matches('\n').count(), 1);
        assert_whole_record(line.trim_end());
    }
    assert_eq!(logger.metrics().total_logged(), 16 * 20);
}
