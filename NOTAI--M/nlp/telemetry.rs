use std::{fmt, path::PathBuf, sync::Arc};

use serde_json::Value;
use shared_logging::{JsonLogger, LogLevel, LogRecord, LogSink};

use crate::{config::LoggingSettings, error::NlpError};

/// Builder for NLP telemetry sinks.
pub struct NlpTelemetryBuilder {
    module: String,
    log_path: Option<PathBuf>,
    sink: Option<Arc<dyn LogSink>>,
    min_level: LogLevel,
}

impl NlpTelemetryBuilder {
    /// Creates the builder.
    #[must_use]
    pub fn new(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            log_path: None,
            sink: None,
            min_level: LogLevel::Info,
        }
    }

    /// Writes JSON lines to the given file.
    #[must_use]
    pub fn log_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_path = Some(path.into());
        self
    }

    /// Uses an existing sink; takes precedence over `log_path`.
    #[must_use]
    pub fn sink(mut self, sink: Arc<dyn LogSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Drops records below this level.
    #[must_use]
    pub const fn min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Builds the telemetry handle.
    pub fn build(self) -> anyhow::Result<NlpTelemetry> {
        let sink = match (self.sink, self.log_path) {
            (Some(sink), _) => Some(sink),
            (None, Some(path)) => Some(Arc::new(JsonLogger::new(path)?) as Arc<dyn LogSink>),
            (None, None) => None,
        };
        Ok(NlpTelemetry {
            inner: Arc::new(TelemetryInner {
                module: self.module,
                sink,
                min_level: self.min_level,
            }),
        })
    }
}

/// Telemetry handle shared across generator, answer engine and runtime.
#[derive(Clone)]
pub struct NlpTelemetry {
    inner: Arc<TelemetryInner>,
}

impl fmt::Debug for NlpTelemetry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NlpTelemetry")
            .field("module", &self.inner.module)
            .field("min_level", &self.inner.min_level)
            .finish()
    }
}

struct TelemetryInner {
    module: String,
    sink: Option<Arc<dyn LogSink>>,
    min_level: LogLevel,
}

impl NlpTelemetry {
    /// Returns a builder.
    #[must_use]
    pub fn builder(module: impl Into<String>) -> NlpTelemetryBuilder {
        NlpTelemetryBuilder::new(module)
    }

    /// Builds telemetry from configuration; `None` when no log path is configured.
    pub fn from_settings(
        module: impl Into<String>,
        settings: &LoggingSettings,
    ) -> anyhow::Result<Option<Self>> {
        let Some(path) = &settings.log_path else {
            return Ok(None);
        };
        let telemetry = Self::builder(module)
            .log_path(path)
            .min_level(settings.level()?)
            .build()?;
        Ok(Some(telemetry))
    }

    /// Logs structured metadata.
    pub fn log(&self, level: LogLevel, message: &str, metadata: Value) -> anyhow::Result<()> {
        if level < self.inner.min_level {
            return Ok(());
        }
        if let Some(sink) = &self.inner.sink {
            let record = LogRecord::new(&self.inner.module, level, message).with_metadata(&metadata);
            sink.write(&record)?;
        }
        Ok(())
    }

    /// Logs an error together with its display text.
    pub fn log_error(&self, message: &str, err: &NlpError, mut metadata: Value) -> anyhow::Result<()> {
        if let Some(obj) = metadata.as_object_mut() {
            obj.insert("error".into(), Value::String(err.to_string()));
        }
        self.log(LogLevel::Warn, message, metadata)
    }
}

/// Logs through an optional telemetry handle, ignoring sink failures.
pub(crate) fn emit(telemetry: Option<&NlpTelemetry>, level: LogLevel, message: &str, metadata: Value) {
    if let Some(tel) = telemetry {
        let _ = tel.log(level, message, metadata);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use shared_logging::MemoryLogger;
    use tempfile::tempdir;

    #[test]
    fn telemetry_writes_log_file() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("nlp.log");
        let telemetry = NlpTelemetry::builder("nlp").log_path(&path).build().unwrap();
        telemetry
            .log(LogLevel::Info, "nlp.generation.completed", json!({ "pairs": 3 }))
            .unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("nlp.generation.completed"));
        assert!(content.contains("\"pairs\":3"));
    }

    #[test]
    fn records_below_min_level_are_dropped() {
        let sink = Arc::new(MemoryLogger::new());
        let telemetry = NlpTelemetry::builder("nlp")
            .sink(sink.clone())
            .min_level(LogLevel::Warn)
            .build()
            .unwrap();
        telemetry.log(LogLevel::Debug, "quiet", json!({})).unwrap();
        telemetry
            .log_error("loud", &NlpError::EmptyInput, json!({}))
            .unwrap();
        assert!(!sink.contains("quiet"));
        let records = sink.snapshot();
        assert_eq!(records.len(), 1);
        assert!(records[0].metadata["error"]
            .as_str()
            .unwrap()
            .contains("non-empty"));
    }

    #[test]
    fn settings_without_path_disable_telemetry() {
        let settings = LoggingSettings::default();
        assert!(NlpTelemetry::from_settings("nlp", &settings).unwrap().is_none());
    }
}
