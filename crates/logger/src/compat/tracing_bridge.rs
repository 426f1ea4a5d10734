//! Bridge from tracing to huelog

use crate::{Attr, Error, Level, Logger, Record, Result, Value};
use std::sync::Arc;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::{Layer, layer::Context, registry::LookupSpan};

/// A tracing layer that forwards to huelog
pub struct TracingBridge<S> {
    logger: Arc<dyn Logger>,
    _phantom: std::marker::PhantomData<fn(S)>,
}

impl<S> TracingBridge<S> {
    /// Create a new tracing bridge
    pub fn new(logger: Arc<dyn Logger>) -> Self {
        Self {
            logger,
            _phantom: std::marker::PhantomData,
        }
    }
}

/// Map tracing levels to our levels
fn map_level(level: tracing::Level) -> Level {
    match level {
        tracing::Level::ERROR => Level::ERROR,
        tracing::Level::WARN => Level::WARN,
        tracing::Level::INFO => Level::INFO,
        tracing::Level::DEBUG => Level::DEBUG,
        tracing::Level::TRACE => Level::DEBUG.offset(-4),
    }
}

impl<S> Layer<S> for TracingBridge<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let level = map_level(*metadata.level());

        // Skip if not enabled
        if !self.logger.is_enabled(level) {
            return;
        }

        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);

        // Build span context if available
        let mut span_context = Vec::new();
        if let Some(scope) = ctx.event_scope(event) {
            for span in scope.from_root() {
                span_context.push(span.name());
            }
        }

        let message = if span_context.is_empty() {
            visitor.message
        } else {
            format!("{}: {}", span_context.join("::"), visitor.message)
        };

        let mut record = Record::new(level, message)
            .with_target(metadata.target())
            .with_attrs(visitor.attrs);

        if let (Some(file), Some(line)) = (metadata.file(), metadata.line()) {
            record = record.with_location(file, line);
        }

        // Layers cannot report failures to the event site
        let _ = self.logger.log(record);
    }
}

/// Splits event fields into the message and typed attributes
#[derive(Default)]
struct FieldVisitor {
    message: String,
    attrs: Vec<Attr>,
}

impl FieldVisitor {
    fn push(&mut self, field: &Field, value: Value) {
        self.attrs.push(Attr::new(field.name(), value));
    }
}

impl Visit for FieldVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.push(field, Value::from(value.to_string()));
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        } else {
            self.push(field, Value::from(format!("{value:?}")));
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.push(field, Value::Int(value));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.push(field, Value::Uint(value));
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        self.push(field, Value::Float(value));
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.push(field, Value::Bool(value));
    }

    fn record_error(&mut self, field: &Field, value: &(dyn std::error::Error + 'static)) {
        self.push(field, Value::from(value.to_string()));
    }
}

/// Initialize tracing to forward to huelog
///
/// This sets up a global subscriber that captures all tracing events and spans.
///
/// # Example
/// ```no_run
/// use huelog::{NoOpLogger, compat::tracing_bridge::init_tracing_bridge};
/// use std::sync::Arc;
///
/// init_tracing_bridge(Arc::new(NoOpLogger)).expect("Failed to set tracing bridge");
/// ```
pub fn init_tracing_bridge(logger: Arc<dyn Logger>) -> Result<()> {
    use tracing_subscriber::prelude::*;

    let layer = TracingBridge::new(logger);

    tracing_subscriber::registry()
        .with(layer)
        .try_init()
        .map_err(|e| Error::Bridge(e.to_string()))
}
