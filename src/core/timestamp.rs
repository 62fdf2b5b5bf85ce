//! Timestamp formatting for encoded records
//!
//! Textual formats are used verbatim by every encoder; numeric formats become
//! JSON numbers in the JSON encoding.

use super::error::{LoggerError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Timestamp format options
///
/// # Examples
///
/// ```
/// use multiformat_logger::TimestampFormat;
/// use chrono::Utc;
///
/// let format = TimestampFormat::Iso8601;
/// assert!(format.format(&Utc::now()).unwrap().ends_with('Z'));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// ISO 8601 with milliseconds: `2025-01-08T10:30:45.123Z`
    #[default]
    Iso8601,

    /// ISO 8601 with microseconds: `2025-01-08T10:30:45.123456Z`
    Iso8601Micros,

    /// RFC 3339 format: `2025-01-08T10:30:45.123456+00:00`
    Rfc3339,

    /// Unix timestamp in seconds: `1736332245`
    Unix,

    /// Unix timestamp in milliseconds: `1736332245123`
    UnixMillis,

    /// Custom strftime format, e.g. `%Y-%m-%d %H:%M:%S`
    Custom(String),
}

impl TimestampFormat {
    /// Format a `DateTime<Utc>` according to this format
    ///
    /// Fails with [`LoggerError::FormatterError`] when a custom pattern
    /// contains an unknown specifier.
    pub fn format(&self, datetime: &DateTime<Utc>) -> Result<String> {
        let pattern = match self {
            TimestampFormat::Iso8601 => "%Y-%m-%dT%H:%M:%S%.3fZ",
            TimestampFormat::Iso8601Micros => "%Y-%m-%dT%H:%M:%S%.6fZ",
            TimestampFormat::Rfc3339 => return Ok(datetime.to_rfc3339()),
            TimestampFormat::Unix => return Ok(datetime.timestamp().to_string()),
            TimestampFormat::UnixMillis => return Ok(datetime.timestamp_millis().to_string()),
            TimestampFormat::Custom(pattern) => pattern.as_str(),
        };

        let mut out = String::new();
        write!(out, "{}", datetime.format(pattern)).map_err(|_| {
            LoggerError::formatter("timestamp", format!("invalid pattern '{}'", pattern))
        })?;
        Ok(out)
    }

    /// Timestamp as a JSON value: numbers for Unix formats, strings otherwise
    pub fn to_json_value(&self, datetime: &DateTime<Utc>) -> Result<serde_json::Value> {
        Ok(match self {
            TimestampFormat::Unix => serde_json::Value::Number(datetime.timestamp().into()),
            TimestampFormat::UnixMillis => {
                serde_json::Value::Number(datetime.timestamp_millis().into())
            }
            _ => serde_json::Value::String(self.format(datetime)?),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_datetime() -> DateTime<Utc> {
        // 2025-01-08 10:30:45.123456 UTC
        Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
            .single()
            .expect("valid datetime")
            + chrono::Duration::microseconds(123456)
    }

    #[test]
    fn test_iso8601_format() {
        let result = TimestampFormat::Iso8601.format(&fixed_datetime()).unwrap();
        assert_eq!(result, "2025-01-08T10:30:45.123Z");
    }

    #[test]
    fn test_iso8601_micros_format() {
        let result = TimestampFormat::Iso8601Micros.format(&fixed_datetime()).unwrap();
        assert_eq!(result, "2025-01-08T10:30:45.123456Z");
    }

    #[test]
    fn test_unix_millis_format() {
        let result = TimestampFormat::UnixMillis.format(&fixed_datetime()).unwrap();
        assert_eq!(result, "1736332245123");
    }

    #[test]
    fn test_custom_format() {
        let format = TimestampFormat::Custom("%Y/%m/%d %H:%M".to_string());
        assert_eq!(format.format(&fixed_datetime()).unwrap(), "2025/01/08 10:30");
    }

    #[test]
    fn test_json_value() {
        let dt = fixed_datetime();
        assert_eq!(
            TimestampFormat::Unix.to_json_value(&dt).unwrap(),
            serde_json::json!(1736332245)
        );
        assert_eq!(
            TimestampFormat::Iso8601.to_json_value(&dt).unwrap(),
            serde_json::json!("2025-01-08T10:30:45.123Z")
        );
    }

    #[test]
    fn test_invalid_custom_pattern_is_an_error() {
        let format = TimestampFormat::Custom("%Q".to_string());
        let err = format.format(&fixed_datetime()).unwrap_err();
        assert!(matches!(err, LoggerError::FormatterError { .. }));
        assert!(format.to_json_value(&fixed_datetime()).is_err());
    }

    #[test]
    fn test_deserialization() {
        let format: TimestampFormat = serde_json::from_str("\"UnixMillis\"").unwrap();
        assert_eq!(format, TimestampFormat::UnixMillis);

        let custom: TimestampFormat = serde_json::from_str(r#"{"Custom":"%Y"}"#).unwrap();
        assert_eq!(custom, TimestampFormat::Custom("%Y".to_string()));
    }
}
