//! Bridge from the `log` crate to huelog

use crate::{Attr, Error, Level, Logger, Record, Result, Value};
use log::kv::{self, VisitSource};
use log::{Log, Metadata, Record as LogRecord};
use std::sync::Arc;

/// Wrapper to implement the log crate's Log trait
pub struct LogBridge {
    logger: Arc<dyn Logger>,
}

impl LogBridge {
    /// Create a new log bridge
    pub fn new(logger: Arc<dyn Logger>) -> Self {
        Self { logger }
    }

    fn convert(record: &LogRecord<'_>) -> Record<'static> {
        let mut converted = Record::new(map_level(record.level()), record.args().to_string())
            .with_target(record.target().to_string());

        if let (Some(file), Some(line)) = (record.file(), record.line()) {
            converted = converted.with_location(file.to_string(), line);
        }

        let mut visitor = AttrVisitor(Vec::new());
        // Collecting into a Vec cannot fail
        let _ = record.key_values().visit(&mut visitor);
        converted.with_attrs(visitor.0)
    }
}

impl Log for LogBridge {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.logger.is_enabled(map_level(metadata.level()))
    }

    fn log(&self, record: &LogRecord) {
        if !self.enabled(record.metadata()) {
            return;
        }

        // `log` has no way to report failures back to the call site
        let _ = self.logger.log(Self::convert(record));
    }

    fn flush(&self) {
        let _ = self.logger.flush();
    }
}

/// Collects `log` key-values as typed attributes
struct AttrVisitor(Vec<Attr>);

impl<'kvs> VisitSource<'kvs> for AttrVisitor {
    fn visit_pair(
        &mut self,
        key: kv::Key<'kvs>,
        value: kv::Value<'kvs>,
    ) -> std::result::Result<(), kv::Error> {
        self.0.push(Attr::new(key.as_str().to_string(), map_value(&value)));
        Ok(())
    }
}

fn map_value(value: &kv::Value<'_>) -> Value {
    if let Some(v) = value.to_bool() {
        Value::Bool(v)
    } else if let Some(v) = value.to_i64() {
        Value::Int(v)
    } else if let Some(v) = value.to_u64() {
        Value::Uint(v)
    } else if let Some(v) = value.to_f64() {
        Value::Float(v)
    } else if let Some(v) = value.to_borrowed_str() {
        Value::from(v.to_string())
    } else {
        Value::from(value.to_string())
    }
}

/// Map log levels to our levels
fn map_level(level: log::Level) -> Level {
    match level {
        log::Level::Error => Level::ERROR,
        log::Level::Warn => Level::WARN,
        log::Level::Info => Level::INFO,
        log::Level::Debug => Level::DEBUG,
        log::Level::Trace => Level::DEBUG.offset(-4),
    }
}

/// Initialize the log crate to use huelog
///
/// This will capture all logs from crates using the `log` crate macros.
///
/// # Example
/// ```no_run
/// use huelog::{NoOpLogger, compat::log_bridge::init_log_bridge};
/// use std::sync::Arc;
///
/// init_log_bridge(Arc::new(NoOpLogger)).expect("Failed to set log bridge");
/// ```
pub fn init_log_bridge(logger: Arc<dyn Logger>) -> Result<()> {
    // log::set_logger requires 'static
    let bridge = Box::leak(Box::new(LogBridge::new(logger)));
    log::set_logger(bridge).map_err(|e| Error::Bridge(e.to_string()))?;

    // Level checks happen in the bridged logger
    log::set_max_level(log::LevelFilter::Trace);
    Ok(())
}
