//! Core logger trait

use crate::{Attr, Level, Record, Result};
use std::borrow::Cow;
use std::sync::Arc;

/// Core logger trait
///
/// A backend decides which levels it accepts, how it renders a record and where the
/// result goes. Derived loggers share the backend's sink and configuration.
pub trait Logger: Send + Sync + 'static {
    /// Log a record
    ///
    /// Sink failures are returned to the caller; backends never retry.
    fn log(&self, record: Record<'_>) -> Result<()>;

    /// Flush any buffered logs
    fn flush(&self) -> Result<()>;

    /// Check if a level is enabled (for fast filtering)
    fn is_enabled(&self, level: Level) -> bool;

    /// Create a child logger with additional pre-bound attributes
    fn with_attrs(&self, attrs: Vec<Attr>) -> Arc<dyn Logger>;

    /// Create a child logger that qualifies subsequent keys with `name`
    fn with_group(&self, name: &str) -> Arc<dyn Logger>;
}

/// Extension trait for convenient logging methods
pub trait LoggerExt: Logger {
    /// Log `message` with attributes, skipping disabled levels
    #[inline]
    fn log_attrs<'a>(
        &self,
        level: Level,
        message: impl Into<Cow<'a, str>>,
        attrs: impl IntoIterator<Item = Attr>,
    ) -> Result<()> {
        if !self.is_enabled(level) {
            return Ok(());
        }
        self.log(Record::new(level, message).with_attrs(attrs))
    }

    /// Log an error
    #[inline]
    fn error<'a>(&self, msg: impl Into<Cow<'a, str>>) -> Result<()> {
        self.log_attrs(Level::ERROR, msg, [])
    }

    /// Log a warning
    #[inline]
    fn warn<'a>(&self, msg: impl Into<Cow<'a, str>>) -> Result<()> {
        self.log_attrs(Level::WARN, msg, [])
    }

    /// Log info
    #[inline]
    fn info<'a>(&self, msg: impl Into<Cow<'a, str>>) -> Result<()> {
        self.log_attrs(Level::INFO, msg, [])
    }

    /// Log debug
    #[inline]
    fn debug<'a>(&self, msg: impl Into<Cow<'a, str>>) -> Result<()> {
        self.log_attrs(Level::DEBUG, msg, [])
    }
}

// Implement for all loggers
impl<T: Logger + ?Sized> LoggerExt for T {}

/// Logger that discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpLogger;

impl Logger for NoOpLogger {
    fn log(&self, _record: Record<'_>) -> Result<()> {
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        Ok(())
    }

    #[inline(always)]
    fn is_enabled(&self, _level: Level) -> bool {
        false
    }

    fn with_attrs(&self, _attrs: Vec<Attr>) -> Arc<dyn Logger> {
        Arc::new(Self)
    }

    fn with_group(&self, _name: &str) -> Arc<dyn Logger> {
        Arc::new(Self)
    }
}
