//! Logfmt encoding (key=value pairs)

use super::escape::{escape_key, escape_value, pair, quote_value};
use super::EncoderConfig;
use crate::core::{Encoder, Field, LogEntry, Result};
use std::sync::Arc;

/// Writes `time=... level=INFO logger=... msg="..." key=value ...`.
///
/// Context fields keep insertion order; a key added twice is written twice,
/// leaving de-duplication to the log consumer.
#[derive(Debug, Clone)]
pub struct LogfmtEncoder {
    config: Arc<EncoderConfig>,
    context: Vec<Field>,
}

impl LogfmtEncoder {
    pub fn new(config: Arc<EncoderConfig>) -> Self {
        Self {
            config,
            context: Vec::new(),
        }
    }

    /// Context fields accumulated so far
    pub fn context(&self) -> &[Field] {
        &self.context
    }
}

impl Default for LogfmtEncoder {
    fn default() -> Self {
        Self::new(EncoderConfig::default().shared())
    }
}

impl Encoder for LogfmtEncoder {
    fn clone_encoder(&self) -> Box<dyn Encoder> {
        Box::new(self.clone())
    }

    fn add_fields(&mut self, fields: &[Field]) {
        self.context.extend_from_slice(fields);
    }

    fn encode_entry(&self, entry: &LogEntry, fields: &[Field]) -> Result<Vec<u8>> {
        let config = &self.config;
        let mut parts = Vec::with_capacity(5 + self.context.len() + fields.len());

        parts.push(format!(
            "{}={}",
            escape_key(&config.time_key),
            escape_value(&config.timestamp_format.format(&entry.timestamp)?)
        ));
        parts.push(format!("{}={}", escape_key(&config.level_key), entry.level.to_str()));
        if !entry.logger_name.is_empty() {
            parts.push(format!(
                "{}={}",
                escape_key(&config.name_key),
                escape_value(&entry.logger_name)
            ));
        }
        if let Some(ref caller) = entry.caller {
            parts.push(format!(
                "{}={}",
                escape_key(&config.caller_key),
                escape_value(&caller.to_string())
            ));
        }
        // message is always quoted
        parts.push(format!(
            "{}={}",
            escape_key(&config.message_key),
            quote_value(&entry.message)
        ));

        for field in self.context.iter().chain(fields) {
            parts.push(pair(&field.key, &field.value));
        }

        let mut line = parts.join(" ");
        line.push('\n');
        Ok(line.into_bytes())
    }
}
