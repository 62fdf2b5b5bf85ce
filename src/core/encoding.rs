//! Encoding kinds and the selector that picks one per write
//!
//! - Console: human-readable line
//! - Json: one JSON object per line
//! - Logfmt: `key=value` pairs compatible with log aggregation tools

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

/// Textual encoding applied to a record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    /// Human-readable text (default)
    ///
    /// Example: `[2025-01-08T10:30:45.123Z] [INFO ] orderer - Request processed`
    #[default]
    Console = 0,

    /// Example: `{"time":"2025-01-08T10:30:45.123Z","level":"INFO","msg":"Request processed"}`
    Json = 1,

    /// Example: `time=2025-01-08T10:30:45.123Z level=INFO msg="Request processed"`
    Logfmt = 2,
}

impl Encoding {
    pub const ALL: [Encoding; 3] = [Encoding::Console, Encoding::Json, Encoding::Logfmt];

    pub fn to_str(&self) -> &'static str {
        match self {
            Encoding::Console => "console",
            Encoding::Json => "json",
            Encoding::Logfmt => "logfmt",
        }
    }

    fn from_tag(tag: u8) -> Self {
        match tag {
            1 => Encoding::Json,
            2 => Encoding::Logfmt,
            _ => Encoding::Console,
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for Encoding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "console" | "text" => Ok(Encoding::Console),
            "json" => Ok(Encoding::Json),
            "logfmt" => Ok(Encoding::Logfmt),
            _ => Err(format!("Invalid encoding: '{}'", s)),
        }
    }
}

/// Reports the encoding that should be used for the next write.
///
/// The answer may change between two calls; cores ask once per write.
pub trait EncodingSelector: Send + Sync {
    fn encoding(&self) -> Encoding;
}

/// A fixed encoding is its own selector
impl EncodingSelector for Encoding {
    fn encoding(&self) -> Encoding {
        *self
    }
}

/// Runtime switch for the active encoding
///
/// Clones share the same switch, so flipping it from one handle is seen by
/// every logger built with another.
///
/// # Example
///
/// ```
/// use multiformat_logger::{Encoding, EncodingSelector, EncodingSwitch};
///
/// let switch = EncodingSwitch::new(Encoding::Console);
/// let handle = switch.clone();
/// handle.set(Encoding::Json);
/// assert_eq!(switch.encoding(), Encoding::Json);
/// ```
#[derive(Debug, Clone)]
pub struct EncodingSwitch {
    current: Arc<AtomicU8>,
}

impl EncodingSwitch {
    pub fn new(initial: Encoding) -> Self {
        Self {
            current: Arc::new(AtomicU8::new(initial as u8)),
        }
    }

    /// Change the encoding used by subsequent writes
    pub fn set(&self, encoding: Encoding) {
        self.current.store(encoding as u8, Ordering::Relaxed);
    }

    pub fn get(&self) -> Encoding {
        Encoding::from_tag(self.current.load(Ordering::Relaxed))
    }
}

impl Default for EncodingSwitch {
    fn default() -> Self {
        Self::new(Encoding::default())
    }
}

impl EncodingSelector for EncodingSwitch {
    fn encoding(&self) -> Encoding {
        self.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoding_default() {
        assert_eq!(Encoding::default(), Encoding::Console);
    }

    #[test]
    fn test_encoding_parse() {
        assert_eq!("JSON".parse::<Encoding>(), Ok(Encoding::Json));
        assert_eq!("logfmt".parse::<Encoding>(), Ok(Encoding::Logfmt));
        assert_eq!("text".parse::<Encoding>(), Ok(Encoding::Console));
        assert!("xml".parse::<Encoding>().is_err());
    }

    #[test]
    fn test_tag_roundtrip() {
        for encoding in Encoding::ALL {
            assert_eq!(Encoding::from_tag(encoding as u8), encoding);
        }
    }

    #[test]
    fn test_switch_shared_between_clones() {
        let switch = EncodingSwitch::default();
        let other = switch.clone();
        assert_eq!(switch.encoding(), Encoding::Console);

        other.set(Encoding::Logfmt);
        assert_eq!(switch.encoding(), Encoding::Logfmt);
    }

    #[test]
    fn test_fixed_selector() {
        assert_eq!(Encoding::Json.encoding(), Encoding::Json);
    }
}
