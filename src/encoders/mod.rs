//! Encoder implementations

pub mod config;
pub mod console;
mod escape;
pub mod json;
pub mod logfmt;

pub use config::EncoderConfig;
pub use console::ConsoleEncoder;
pub use json::JsonEncoder;
pub use logfmt::LogfmtEncoder;

use crate::core::{Encoder, Encoding};
use std::collections::HashMap;
use std::sync::Arc;

/// Fresh encoder for one encoding
pub fn new_encoder(encoding: Encoding, config: Arc<EncoderConfig>) -> Box<dyn Encoder> {
    match encoding {
        Encoding::Console => Box::new(ConsoleEncoder::new(config)),
        Encoding::Json => Box::new(JsonEncoder::new(config)),
        Encoding::Logfmt => Box::new(LogfmtEncoder::new(config)),
    }
}

/// One fresh, independent encoder per encoding kind
pub fn default_set(config: &EncoderConfig) -> HashMap<Encoding, Box<dyn Encoder>> {
    let config = config.clone().shared();
    Encoding::ALL
        .into_iter()
        .map(|encoding| (encoding, new_encoder(encoding, Arc::clone(&config))))
        .collect()
}
