//! Human-readable console encoding

use super::escape::{escape_control, pair};
use super::EncoderConfig;
use crate::core::{Encoder, Field, LogEntry, Result};
#[cfg(feature = "console")]
use colored::Colorize;
use std::sync::Arc;

/// Renders `[time] [LEVEL] logger caller - message key=value ...`
///
/// Context fields keep insertion order and are printed before call-site
/// fields, quoted logfmt-style. Duplicate keys are printed as many times as
/// they were added.
#[derive(Debug, Clone)]
pub struct ConsoleEncoder {
    config: Arc<EncoderConfig>,
    context: Vec<Field>,
}

impl ConsoleEncoder {
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

    fn level_str(&self, entry: &LogEntry) -> String {
        let padded = format!("{:5}", entry.level.to_str());

        #[cfg(feature = "console")]
        if self.config.use_colors {
            return padded.color(entry.level.color_code()).to_string();
        }

        padded
    }
}

impl Default for ConsoleEncoder {
    fn default() -> Self {
        Self::new(EncoderConfig::default().shared())
    }
}

impl Encoder for ConsoleEncoder {
    fn clone_encoder(&self) -> Box<dyn Encoder> {
        Box::new(self.clone())
    }

    fn add_fields(&mut self, fields: &[Field]) {
        self.context.extend_from_slice(fields);
    }

    fn encode_entry(&self, entry: &LogEntry, fields: &[Field]) -> Result<Vec<u8>> {
        let mut line = format!(
            "[{}] [{}]",
            self.config.timestamp_format.format(&entry.timestamp)?,
            self.level_str(entry)
        );

        if !entry.logger_name.is_empty() {
            line.push(' ');
            line.push_str(&escape_control(&entry.logger_name));
        }
        if let Some(ref caller) = entry.caller {
            line.push(' ');
            line.push_str(&caller.to_string());
        }

        line.push_str(" - ");
        line.push_str(&entry.message);

        for field in self.context.iter().chain(fields) {
            line.push(' ');
            line.push_str(&pair(&field.key, &field.value));
        }

        line.push('\n');
        Ok(line.into_bytes())
    }
}
