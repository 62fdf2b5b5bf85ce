//! Logger facade over a [`Core`]

use super::{
    checked_entry::{CheckedEntry, Core},
    encoder::Encoder,
    encoding::{Encoding, EncodingSelector},
    error::{LoggerError, Result},
    field::Field,
    level::{LevelEnabler, LevelResolver},
    log_entry::LogEntry,
    log_level::LogLevel,
    logging_core::LoggingCore,
    metrics::LoggerMetrics,
    observer::Observer,
    sink::Sink,
};
use crate::config::{LoggerConfig, OutputTarget};
use crate::encoders::{self, EncoderConfig};
use crate::identity;
use crate::sinks::WriterSink;
use std::collections::HashMap;
use std::sync::Arc;

/// Named handle used at call sites.
///
/// Cheap to clone. [`Logger::with`] and [`Logger::named`] return new loggers
/// and leave `self` unchanged; all of them share metrics with their root.
#[derive(Clone)]
pub struct Logger {
    name: String,
    core: Arc<dyn Core>,
    metrics: Arc<LoggerMetrics>,
}

impl Logger {
    /// Wrap an existing core as the root logger
    pub fn new(core: Arc<dyn Core>) -> Self {
        Self {
            name: String::new(),
            core,
            metrics: Arc::new(LoggerMetrics::new()),
        }
    }

    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use multiformat_logger::prelude::*;
    ///
    /// let logger = Logger::builder()
    ///     .min_level(LogLevel::Debug)
    ///     .encoding(Encoding::Logfmt)
    ///     .sink(WriterSink::new(Vec::new()))
    ///     .build()
    ///     .unwrap();
    /// logger.debug("ready");
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn core(&self) -> &Arc<dyn Core> {
        &self.core
    }

    /// Metrics shared by this logger and everything derived from it
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Child logger named `<self>.<name>` (or `name` for the root)
    #[must_use]
    pub fn named(&self, name: &str) -> Logger {
        let name = match (self.name.is_empty(), name.is_empty()) {
            (_, true) => self.name.clone(),
            (true, false) => name.to_string(),
            (false, false) => format!("{}.{}", self.name, name),
        };
        Logger {
            name,
            core: Arc::clone(&self.core),
            metrics: Arc::clone(&self.metrics),
        }
    }

    /// Child logger adding `fields` to every record it writes
    #[must_use]
    pub fn with(&self, fields: &[Field]) -> Logger {
        if fields.is_empty() {
            return self.clone();
        }
        Logger {
            name: self.name.clone(),
            core: self.core.with(fields),
            metrics: Arc::clone(&self.metrics),
        }
    }

    pub fn log(&self, level: LogLevel, message: impl AsRef<str>) {
        self.log_with_fields(level, message, &[]);
    }

    /// Log with call-site fields
    pub fn log_with_fields(&self, level: LogLevel, message: impl AsRef<str>, fields: &[Field]) {
        self.log_entry(LogEntry::new(level, message), fields);
    }

    /// Run a prepared entry through check and write.
    ///
    /// The entry is stamped with this logger's name. Write failures cannot
    /// be returned from here; they are reported on stderr and counted as
    /// dropped.
    pub fn log_entry(&self, entry: LogEntry, fields: &[Field]) {
        let entry = entry.with_logger_name(self.name.as_str());
        let checked = Arc::clone(&self.core).check(CheckedEntry::new(entry));

        if checked.is_empty() {
            self.metrics.record_filtered();
            return;
        }

        match checked.write(fields) {
            Ok(()) => {
                self.metrics.record_logged();
            }
            Err(e) => {
                self.metrics.record_dropped();
                eprintln!("[LOGGER ERROR] Failed to write log entry: {}", e);
            }
        }
    }

    #[inline]
    pub fn trace(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Trace, message);
    }

    #[inline]
    pub fn debug(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Debug, message);
    }

    #[inline]
    pub fn info(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Info, message);
    }

    #[inline]
    pub fn warn(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Warn, message);
    }

    #[inline]
    pub fn error(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Error, message);
    }

    /// Log at `Panic`, then panic with the same message
    pub fn panic(&self, message: impl AsRef<str>) -> ! {
        let message = message.as_ref();
        self.log(LogLevel::Panic, message);
        panic!("{}", message);
    }

    /// Log at `Fatal`, then exit the process with status 1
    pub fn fatal(&self, message: impl AsRef<str>) -> ! {
        self.log(LogLevel::Fatal, message);
        std::process::exit(1);
    }

    /// Flush the underlying sink(s)
    pub fn sync(&self) -> Result<()> {
        self.core.sync()
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("metrics", &self.metrics)
            .finish()
    }
}

/// Builder for constructing a [`Logger`] backed by a [`LoggingCore`]
///
/// Every encoding gets a fresh shipped encoder built from the encoder config
/// unless replaced through [`LoggerBuilder::encoder`].
///
/// # Example
/// ```
/// use multiformat_logger::prelude::*;
///
/// let switch = EncodingSwitch::new(Encoding::Console);
/// let logger = Logger::builder()
///     .name("orderer")
///     .min_level(LogLevel::Info)
///     .levels(|name: &str| if name.starts_with("orderer.raft") { LogLevel::Warn } else { LogLevel::Debug })
///     .selector(switch.clone())
///     .sink(WriterSink::stderr())
///     .build()
///     .unwrap();
///
/// logger.info("started");
/// switch.set(Encoding::Json);
/// logger.named("raft").warn("leader changed");
/// ```
pub struct LoggerBuilder {
    name: String,
    enabler: Arc<dyn LevelEnabler>,
    levels: Arc<dyn LevelResolver>,
    selector: Arc<dyn EncodingSelector>,
    encoder_config: EncoderConfig,
    encoders: HashMap<Encoding, Box<dyn Encoder>>,
    sink: Option<Arc<dyn Sink>>,
    observer: Option<Arc<dyn Observer>>,
    fields: Vec<Field>,
    include_identity: bool,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    ///
    /// Defaults: global level `Info`, per-name resolver passing everything,
    /// console encoding, no sink.
    pub fn new() -> Self {
        Self {
            name: String::new(),
            enabler: Arc::new(LogLevel::Info),
            levels: Arc::new(LogLevel::Trace),
            selector: Arc::new(Encoding::Console),
            encoder_config: EncoderConfig::default(),
            encoders: HashMap::new(),
            sink: None,
            observer: None,
            fields: Vec::new(),
            include_identity: false,
        }
    }

    /// Start from a declarative config, opening its output target
    pub fn from_config(config: &LoggerConfig) -> Result<Self> {
        let builder = Self::new()
            .name(config.name.as_str())
            .min_level(config.level)
            .encoding(config.encoding)
            .encoder_config(config.encoder.clone())
            .include_identity(config.include_identity);

        let builder = match config.output {
            OutputTarget::Stderr => builder.sink(WriterSink::stderr()),
            OutputTarget::Stdout => builder.sink(WriterSink::stdout()),
            #[cfg(feature = "file")]
            OutputTarget::File { ref path } => builder.sink(crate::sinks::FileSink::new(path)?),
            #[cfg(not(feature = "file"))]
            OutputTarget::File { .. } => {
                return Err(LoggerError::config(
                    "LoggerConfig",
                    "file output requires the `file` feature",
                ))
            }
        };
        Ok(builder)
    }

    #[must_use = "builder methods return a new value"]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the global minimum log level
    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: LogLevel) -> Self {
        self.enabler = Arc::new(level);
        self
    }

    /// Use a custom global gate, e.g. a shared [`AtomicLevel`](crate::AtomicLevel)
    #[must_use = "builder methods return a new value"]
    pub fn level_enabler(mut self, enabler: impl LevelEnabler + 'static) -> Self {
        self.enabler = Arc::new(enabler);
        self
    }

    /// Set the per-logger-name level resolver
    ///
    /// It is ANDed with the global level: a resolver more permissive than the
    /// global floor does not let records through.
    #[must_use = "builder methods return a new value"]
    pub fn levels(mut self, levels: impl LevelResolver + 'static) -> Self {
        self.levels = Arc::new(levels);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn shared_levels(mut self, levels: Arc<dyn LevelResolver>) -> Self {
        self.levels = levels;
        self
    }

    /// Use a fixed encoding
    #[must_use = "builder methods return a new value"]
    pub fn encoding(mut self, encoding: Encoding) -> Self {
        self.selector = Arc::new(encoding);
        self
    }

    /// Choose the encoding per write, e.g. through an [`EncodingSwitch`](crate::EncodingSwitch)
    #[must_use = "builder methods return a new value"]
    pub fn selector(mut self, selector: impl EncodingSelector + 'static) -> Self {
        self.selector = Arc::new(selector);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn encoder_config(mut self, config: EncoderConfig) -> Self {
        self.encoder_config = config;
        self
    }

    /// Replace the shipped encoder for one encoding
    #[must_use = "builder methods return a new value"]
    pub fn encoder<E: Encoder + 'static>(mut self, encoding: Encoding, encoder: E) -> Self {
        self.encoders.insert(encoding, Box::new(encoder));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn sink<S: Sink + 'static>(mut self, sink: S) -> Self {
        self.sink = Some(Arc::new(sink));
        self
    }

    /// Use a sink that is also written to from elsewhere
    #[must_use = "builder methods return a new value"]
    pub fn shared_sink(mut self, sink: Arc<dyn Sink>) -> Self {
        self.sink = Some(sink);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn observer<O: Observer + 'static>(mut self, observer: O) -> Self {
        self.observer = Some(Arc::new(observer));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn shared_observer(mut self, observer: Arc<dyn Observer>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Fields added to every record of the built logger
    #[must_use = "builder methods return a new value"]
    pub fn fields(mut self, fields: impl IntoIterator<Item = Field>) -> Self {
        self.fields.extend(fields);
        self
    }

    /// Label every record with the environment identity fields
    #[must_use = "builder methods return a new value"]
    pub fn include_identity(mut self, include: bool) -> Self {
        self.include_identity = include;
        self
    }

    /// Build the root [`LoggingCore`] without the facade
    pub fn build_core(self) -> Result<LoggingCore> {
        let sink = self
            .sink
            .ok_or_else(|| LoggerError::config("LoggerBuilder", "no sink configured"))?;

        let mut encoders = encoders::default_set(&self.encoder_config);
        encoders.extend(self.encoders);

        let core = LoggingCore::new(
            self.enabler,
            self.levels,
            encoders,
            self.selector,
            sink,
            self.observer,
        );

        let mut fields = self.fields;
        if self.include_identity {
            fields.extend(identity::identity_fields());
        }

        Ok(if fields.is_empty() {
            core
        } else {
            core.with_fields(&fields)
        })
    }

    /// Build the Logger
    pub fn build(self) -> Result<Logger> {
        let name = self.name.clone();
        let core = self.build_core()?;
        Ok(Logger::new(Arc::new(core)).named(&name))
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
