//! Declarative logger configuration
//!
//! `LoggerConfig` is plain serde data, meant to be embedded in an
//! application's own configuration file and turned into a
//! [`LoggerBuilder`](crate::LoggerBuilder) at startup.

use crate::core::{Encoding, LogLevel};
use crate::encoders::EncoderConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where rendered records go
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputTarget {
    #[default]
    Stderr,
    Stdout,
    /// Append to a file (requires the `file` feature)
    File { path: PathBuf },
}

/// # Example
///
/// ```
/// use multiformat_logger::{Encoding, LogLevel, LoggerConfig, OutputTarget};
///
/// let config: LoggerConfig = serde_json::from_str(
///     r#"{"name":"orderer","level":"debug","encoding":"json","output":"stdout"}"#,
/// )
/// .unwrap();
///
/// assert_eq!(config.level, LogLevel::Debug);
/// assert_eq!(config.encoding, Encoding::Json);
/// assert_eq!(config.output, OutputTarget::Stdout);
/// assert!(!config.include_identity);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Name of the root logger
    pub name: String,
    /// Global level floor
    pub level: LogLevel,
    /// Initial encoding
    pub encoding: Encoding,
    pub encoder: EncoderConfig,
    pub output: OutputTarget,
    /// Add pod/namespace/deployment/node type fields to every record
    pub include_identity: bool,
}
