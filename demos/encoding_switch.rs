//! Switching encodings at runtime
//!
//! One logger, one sink: the active encoding is read on every write, and
//! fields scoped before a switch keep showing up afterwards.
//!
//! Run with: cargo run --example encoding_switch

use multiformat_logger::prelude::*;

fn main() -> Result<()> {
    println!("=== Multiformat Logger - Encoding Switch Example ===\n");

    let switch = EncodingSwitch::new(Encoding::Console);
    let logger = Logger::builder()
        .name("orderer")
        .min_level(LogLevel::Debug)
        .levels(|name: &str| {
            if name.starts_with("orderer.raft") {
                LogLevel::Warn
            } else {
                LogLevel::Debug
            }
        })
        .selector(switch.clone())
        .sink(WriterSink::stdout())
        .include_identity(true)
        .build()?;

    let cutter = logger
        .named("blockcutter")
        .with(&[Field::new("channel", "system")]);
    let raft = logger.named("raft");

    for encoding in Encoding::ALL {
        println!("\n-- {} --", encoding);
        switch.set(encoding);

        cutter.info("Cutting block");
        cutter.log_with_fields(LogLevel::Debug, "Batch stats", &[Field::new("txs", 42)]);
        raft.info("Heartbeat (hidden: raft logs at WARN)");
        raft.warn("Leader changed");
    }

    logger.sync()?;
    println!("\n=== Example completed successfully! ===");

    Ok(())
}
