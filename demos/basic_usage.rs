//! Basic logger usage example
//!
//! Demonstrates the console encoder, severity levels and named child loggers.
//!
//! Run with: cargo run --example basic_usage

use multiformat_logger::prelude::*;
use multiformat_logger::{info, warn};

fn main() -> Result<()> {
    println!("=== Multiformat Logger - Basic Usage Example ===\n");

    let level = AtomicLevel::new(LogLevel::Trace);
    let logger = Logger::builder()
        .name("node")
        .level_enabler(level.clone())
        .encoder_config(EncoderConfig::new().with_colors(true))
        .sink(WriterSink::stdout())
        .build()?;

    println!("1. Logging at different levels:");
    logger.trace("This is a trace message");
    logger.debug("This is a debug message");
    logger.info("This is an info message");
    logger.warn("This is a warning message");
    logger.error("This is an error message");

    println!("\n2. Raising the level to INFO at runtime:");
    level.set_level(LogLevel::Info);
    logger.trace("Trace message (hidden)");
    logger.debug("Debug message (hidden)");
    logger.info("Info message (visible)");

    println!("\n3. Named loggers, scoped and call-site fields:");
    let gossip = logger
        .named("gossip")
        .with(&[Field::new("channel", "mychannel")]);
    info!(gossip, "Membership view changed, {} peers alive", 4);
    warn!(gossip, ["peer" => "peer1.org2", "attempt" => 3], "Peer unreachable");

    println!("\n4. Metrics:");
    let metrics = logger.metrics();
    println!(
        "   logged={} filtered={} dropped={}",
        metrics.total_logged(),
        metrics.filtered_count(),
        metrics.dropped_count()
    );

    logger.sync()?;
    println!("\n=== Example completed successfully! ===");

    Ok(())
}
