//! Test support utilities
//!
//! This module provides utilities for capturing logs during tests.
//! It's only available when the `test-support` feature is enabled.

use crate::{Attr, Level, Logger, Record, Result, Scope};
use std::fmt::Write as FmtWrite;
use std::sync::{Arc, Mutex};

/// A logger that captures all logs in memory for testing
///
/// Each record becomes one uncolored line: `LEVEL [target] message key=value ...`.
#[derive(Clone)]
pub struct CaptureLogger {
    logs: Arc<Mutex<String>>,
    min_level: Level,
    scope: Scope,
}

impl CaptureLogger {
    /// Create a new capture logger accepting every level
    pub fn new() -> Self {
        Self {
            logs: Arc::new(Mutex::new(String::new())),
            min_level: Level::new(i32::MIN),
            scope: Scope::new(),
        }
    }

    /// Create with a specific level
    pub fn with_level(mut self, level: Level) -> Self {
        self.min_level = level;
        self
    }

    /// Get all captured logs
    pub fn logs(&self) -> String {
        self.logs.lock().unwrap().clone()
    }

    /// Captured lines in order
    pub fn lines(&self) -> Vec<String> {
        self.logs().lines().map(str::to_string).collect()
    }

    /// Clear captured logs
    pub fn clear(&self) {
        self.logs.lock().unwrap().clear();
    }

    /// Check if logs contain a specific string
    pub fn contains(&self, text: &str) -> bool {
        self.logs.lock().unwrap().contains(text)
    }
}

impl Default for CaptureLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger for CaptureLogger {
    fn log(&self, record: Record<'_>) -> Result<()> {
        let mut line = format!("{} [{}] {}", record.level, record.target, record.message);
        for attr in self.scope.resolve(&record) {
            let _ = write!(line, " {attr}");
        }

        if let Ok(mut logs) = self.logs.lock() {
            logs.push_str(&line);
            logs.push('\n');
        }
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        // No-op for in-memory logger
        Ok(())
    }

    #[inline(always)]
    fn is_enabled(&self, level: Level) -> bool {
        level >= self.min_level
    }

    fn with_attrs(&self, attrs: Vec<Attr>) -> Arc<dyn Logger> {
        Arc::new(CaptureLogger {
            logs: self.logs.clone(),
            min_level: self.min_level,
            scope: self.scope.with_attrs(attrs),
        })
    }

    fn with_group(&self, name: &str) -> Arc<dyn Logger> {
        Arc::new(CaptureLogger {
            logs: self.logs.clone(),
            min_level: self.min_level,
            scope: self.scope.with_group(name),
        })
    }
}
