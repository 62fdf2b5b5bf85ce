//! Shared configuration for the shipped encoders

use crate::core::TimestampFormat;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Key names and presentation options used by every shipped encoder
///
/// Deserializable, so it can sit inside an application's config file. Missing
/// keys fall back to their defaults.
///
/// # Example
///
/// ```
/// use multiformat_logger::encoders::EncoderConfig;
/// use multiformat_logger::TimestampFormat;
///
/// let config: EncoderConfig =
///     serde_json::from_str(r#"{"message_key":"message","timestamp_format":"UnixMillis"}"#).unwrap();
/// assert_eq!(config.message_key, "message");
/// assert_eq!(config.level_key, "level");
/// assert_eq!(config.timestamp_format, TimestampFormat::UnixMillis);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncoderConfig {
    pub timestamp_format: TimestampFormat,
    /// ANSI colors for the level in console output
    pub use_colors: bool,
    pub time_key: String,
    pub level_key: String,
    pub name_key: String,
    pub caller_key: String,
    pub message_key: String,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            timestamp_format: TimestampFormat::default(),
            use_colors: false,
            time_key: "time".to_string(),
            level_key: "level".to_string(),
            name_key: "logger".to_string(),
            caller_key: "caller".to_string(),
            message_key: "msg".to_string(),
        }
    }
}

impl EncoderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    #[must_use]
    pub fn with_message_key(mut self, key: impl Into<String>) -> Self {
        self.message_key = key.into();
        self
    }

    /// Wrap in an Arc so the encoders built from it share one copy
    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}
