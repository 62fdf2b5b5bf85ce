//! JSON encoding, one object per line (JSONL)

use super::EncoderConfig;
use crate::core::{Encoder, Field, LogEntry, Result};
use serde_json::{Map, Value};
use std::sync::Arc;

/// Writes each entry as a single-line JSON object.
///
/// Context fields are held in a JSON map, so adding a key twice keeps the
/// last value. Call-site fields override context fields, and entry metadata
/// (time, level, logger, caller, message) overrides both.
#[derive(Debug, Clone)]
pub struct JsonEncoder {
    config: Arc<EncoderConfig>,
    context: Map<String, Value>,
}

impl JsonEncoder {
    pub fn new(config: Arc<EncoderConfig>) -> Self {
        Self {
            config,
            context: Map::new(),
        }
    }

    /// Context fields accumulated so far
    pub fn context(&self) -> &Map<String, Value> {
        &self.context
    }

    fn to_object(&self, entry: &LogEntry, fields: &[Field]) -> Result<Map<String, Value>> {
        let config = &self.config;
        let mut object = self.context.clone();

        for field in fields {
            object.insert(field.key.clone(), field.value.to_json_value());
        }

        object.insert(
            config.time_key.clone(),
            config.timestamp_format.to_json_value(&entry.timestamp)?,
        );
        object.insert(
            config.level_key.clone(),
            Value::String(entry.level.to_str().to_string()),
        );
        if !entry.logger_name.is_empty() {
            object.insert(
                config.name_key.clone(),
                Value::String(entry.logger_name.clone()),
            );
        }
        if let Some(ref caller) = entry.caller {
            object.insert(config.caller_key.clone(), Value::String(caller.to_string()));
        }
        object.insert(
            config.message_key.clone(),
            Value::String(entry.message.clone()),
        );

        Ok(object)
    }
}

impl Default for JsonEncoder {
    fn default() -> Self {
        Self::new(EncoderConfig::default().shared())
    }
}

impl Encoder for JsonEncoder {
    fn clone_encoder(&self) -> Box<dyn Encoder> {
        Box::new(self.clone())
    }

    fn add_fields(&mut self, fields: &[Field]) {
        for field in fields {
            self.context
                .insert(field.key.clone(), field.value.to_json_value());
        }
    }

    fn encode_entry(&self, entry: &LogEntry, fields: &[Field]) -> Result<Vec<u8>> {
        let mut buf = serde_json::to_vec(&Value::Object(self.to_object(entry, fields)?))?;
        buf.push(b'\n');
        Ok(buf)
    }
}
