//! Log record type

use crate::{Attr, Level};
use chrono::{DateTime, Utc};
use std::borrow::Cow;

/// One structured log event
///
/// Built per log call and handed to a [`Logger`](crate::Logger) by value. Attributes
/// keep insertion order and may repeat keys.
#[derive(Debug, Clone)]
pub struct Record<'a> {
    /// Log level
    pub level: Level,
    /// The log message
    pub message: Cow<'a, str>,
    /// When the log was created
    pub timestamp: DateTime<Utc>,
    /// Target module
    pub target: Cow<'a, str>,
    /// File location
    pub file: Option<Cow<'a, str>>,
    /// Line number
    pub line: Option<u32>,
    /// Attributes in insertion order
    pub attrs: Vec<Attr>,
}

impl<'a> Record<'a> {
    /// Create a record stamped with the current time
    #[inline]
    pub fn new(level: Level, message: impl Into<Cow<'a, str>>) -> Self {
        Self {
            level,
            message: message.into(),
            timestamp: Utc::now(),
            target: Cow::Borrowed(module_path!()),
            file: None,
            line: None,
            attrs: Vec::new(),
        }
    }

    /// Builder-style method for setting the timestamp
    #[inline]
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Builder-style method for setting target
    #[inline]
    pub fn with_target(mut self, target: impl Into<Cow<'a, str>>) -> Self {
        self.target = target.into();
        self
    }

    /// Builder-style method for setting location
    #[inline]
    pub fn with_location(mut self, file: impl Into<Cow<'a, str>>, line: u32) -> Self {
        self.file = Some(file.into());
        self.line = Some(line);
        self
    }

    /// Append one attribute
    #[inline]
    pub fn with_attr(mut self, attr: Attr) -> Self {
        self.attrs.push(attr);
        self
    }

    /// Append several attributes, keeping their order
    pub fn with_attrs(mut self, attrs: impl IntoIterator<Item = Attr>) -> Self {
        self.attrs.extend(attrs);
        self
    }

    /// `file:line` when both are known
    pub fn location(&self) -> Option<String> {
        match (&self.file, self.line) {
            (Some(file), Some(line)) => Some(format!("{file}:{line}")),
            _ => None,
        }
    }
}
