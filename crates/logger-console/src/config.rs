//! Render configuration
//!
//! A [`RenderConfig`] is built once and shared read-only by every render; loggers swap
//! whole snapshots instead of mutating one in place. Every struct here deserializes
//! with defaults for missing fields, so a host application can embed a partial
//! `[logging]` table in its own config file.

use crate::style::*;
use huelog::Level;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A field the renderer can place on the line
///
/// Unclassified attributes always follow the ordered fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    /// Record level
    Level,
    /// Record timestamp
    Time,
    /// HTTP status attribute
    Status,
    /// Duration attribute
    Duration,
    /// HTTP method attribute
    Method,
    /// Request path attribute
    Path,
    /// Source location of the log call
    Source,
    /// Record message
    Message,
}

impl Field {
    /// Number of fields
    pub const COUNT: usize = 8;

    /// Every field in the default order
    pub const ALL: [Self; Self::COUNT] = [
        Self::Level,
        Self::Time,
        Self::Status,
        Self::Duration,
        Self::Method,
        Self::Path,
        Self::Source,
        Self::Message,
    ];

    pub(crate) const fn index(self) -> usize {
        self as usize
    }

    /// Lowercase name, as used in configuration files
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Level => "level",
            Self::Time => "time",
            Self::Status => "status",
            Self::Duration => "duration",
            Self::Method => "method",
            Self::Path => "path",
            Self::Source => "source",
            Self::Message => "message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Attribute keys routed into the dedicated slots
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Keys {
    /// Key holding an HTTP status code
    pub status: String,
    /// Key holding an elapsed time
    pub duration: String,
    /// Key holding an HTTP method
    pub method: String,
    /// Key holding a request path
    pub path: String,
}

impl Default for Keys {
    fn default() -> Self {
        Self {
            status: "status".to_string(),
            duration: "duration".to_string(),
            method: "method".to_string(),
            path: "path".to_string(),
        }
    }
}

/// One style per semantic slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Debug level
    pub level_debug: Style,
    /// Info level
    pub level_info: Style,
    /// Warn level
    pub level_warn: Style,
    /// Error level
    pub level_error: Style,

    /// Status 100–199
    pub status_1xx: Style,
    /// Status 200–299
    pub status_2xx: Style,
    /// Status 300–399
    pub status_3xx: Style,
    /// Status 400–499
    pub status_4xx: Style,
    /// Status 500 and above
    pub status_5xx: Style,
    /// Integer status below 100
    pub status_unknown: Style,

    /// GET requests
    pub method_get: Style,
    /// POST requests
    pub method_post: Style,
    /// PUT requests
    pub method_put: Style,
    /// PATCH requests
    pub method_patch: Style,
    /// DELETE requests
    pub method_delete: Style,
    /// Any other verb
    pub method_other: Style,

    /// Timestamp
    pub time: Style,
    /// Duration slot
    pub duration: Style,
    /// Path slot
    pub path: Style,
    /// Source location
    pub source: Style,
    /// Message
    pub message: Style,

    /// Key of an unclassified attribute
    pub attr_key: Style,
    /// Delimiter between key and value
    pub attr_delimiter: Style,
    /// Value of an unclassified attribute
    pub attr_value: Style,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            level_debug: Style::from([FG_HI_MAGENTA]),
            level_info: Style::from([FG_GREEN]),
            level_warn: Style::from([FG_HI_YELLOW]),
            level_error: Style::from([FG_HI_RED]),

            status_1xx: Style::from([FG_GREEN]),
            status_2xx: Style::from([FG_GREEN]),
            status_3xx: Style::from([FG_GREEN]),
            status_4xx: Style::from([FG_HI_YELLOW]),
            status_5xx: Style::from([FG_HI_RED]),
            status_unknown: Style::from([FG_HI_RED]),

            method_get: Style::from([FG_GREEN]),
            method_post: Style::from([FG_YELLOW]),
            method_put: Style::from([FG_BLUE]),
            method_patch: Style::from([FG_CYAN]),
            method_delete: Style::from([FG_RED]),
            method_other: Style::from([FG_MAGENTA]),

            time: Style::from([FG_HI_BLACK]),
            duration: Style::from([FG_CYAN, ITALIC]),
            path: Style::from([FG_HI_CYAN]),
            source: Style::from([FAINT]),
            message: Style::from([RESET]),

            attr_key: Style::from([FG_BLUE]),
            attr_delimiter: Style::from([FG_HI_BLACK]),
            attr_value: Style::from([FG_YELLOW]),
        }
    }
}

impl Palette {
    /// Palette whose every style is plain
    pub fn plain() -> Self {
        let plain = Style::plain;
        Self {
            level_debug: plain(),
            level_info: plain(),
            level_warn: plain(),
            level_error: plain(),
            status_1xx: plain(),
            status_2xx: plain(),
            status_3xx: plain(),
            status_4xx: plain(),
            status_5xx: plain(),
            status_unknown: plain(),
            method_get: plain(),
            method_post: plain(),
            method_put: plain(),
            method_patch: plain(),
            method_delete: plain(),
            method_other: plain(),
            time: plain(),
            duration: plain(),
            path: plain(),
            source: plain(),
            message: plain(),
            attr_key: plain(),
            attr_delimiter: plain(),
            attr_value: plain(),
        }
    }

    /// Style of a named level; other levels have none
    pub fn level(&self, level: Level) -> Option<&Style> {
        match level {
            Level::DEBUG => Some(&self.level_debug),
            Level::INFO => Some(&self.level_info),
            Level::WARN => Some(&self.level_warn),
            Level::ERROR => Some(&self.level_error),
            _ => None,
        }
    }

    /// Style of an integer status code
    pub fn status(&self, code: i128) -> &Style {
        match code {
            500.. => &self.status_5xx,
            400.. => &self.status_4xx,
            300.. => &self.status_3xx,
            200.. => &self.status_2xx,
            100.. => &self.status_1xx,
            _ => &self.status_unknown,
        }
    }

    /// Style of an HTTP method, matched exactly
    pub fn method(&self, method: &str) -> &Style {
        match method {
            "GET" => &self.method_get,
            "POST" => &self.method_post,
            "PUT" => &self.method_put,
            "PATCH" => &self.method_patch,
            "DELETE" => &self.method_delete,
            _ => &self.method_other,
        }
    }
}

/// Everything the renderer reads
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// `chrono` strftime pattern for the timestamp
    ///
    /// Empty or invalid patterns fall back to [`RenderConfig::DEFAULT_TIME_FORMAT`].
    pub time_format: String,
    /// Render timestamps in the local timezone instead of UTC
    pub local_time: bool,
    /// Fields to show, in order
    pub field_order: Vec<Field>,
    /// Text between an attribute's key and value
    pub delimiter: String,
    /// Keys routed into the attribute slots
    pub keys: Keys,
    /// Styles per slot
    pub palette: Palette,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            time_format: Self::DEFAULT_TIME_FORMAT.to_string(),
            local_time: true,
            field_order: Field::ALL.to_vec(),
            delimiter: "=".to_string(),
            keys: Keys::default(),
            palette: Palette::default(),
        }
    }
}

impl RenderConfig {
    /// `[15:04:05.000]`: 24-hour clock with milliseconds
    pub const DEFAULT_TIME_FORMAT: &'static str = "[%H:%M:%S%.3f]";

    /// Set the timestamp pattern
    pub fn with_time_format(mut self, time_format: impl Into<String>) -> Self {
        self.time_format = time_format.into();
        self
    }

    /// Choose between local time and UTC
    pub fn with_local_time(mut self, local_time: bool) -> Self {
        self.local_time = local_time;
        self
    }

    /// Set which fields appear, in order
    pub fn with_field_order(mut self, field_order: impl IntoIterator<Item = Field>) -> Self {
        self.field_order = field_order.into_iter().collect();
        self
    }

    /// Set the slot keys
    pub fn with_keys(mut self, keys: Keys) -> Self {
        self.keys = keys;
        self
    }

    /// Set the key/value delimiter
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Set the palette
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Whether `field` is part of the line
    pub fn includes(&self, field: Field) -> bool {
        self.field_order.contains(&field)
    }

    /// Slot an attribute key is routed into, if its field is shown
    ///
    /// When several slots share a key, status wins over duration, method and path.
    pub fn slot_for(&self, key: &str) -> Option<Field> {
        let keys = &self.keys;
        [
            (Field::Status, &keys.status),
            (Field::Duration, &keys.duration),
            (Field::Method, &keys.method),
            (Field::Path, &keys.path),
        ]
        .into_iter()
        .find(|(field, slot_key)| slot_key.as_str() == key && self.includes(*field))
        .map(|(field, _)| field)
    }

    /// Pattern actually used for timestamps
    pub(crate) fn effective_time_format(&self) -> &str {
        if self.time_format.is_empty() {
            Self::DEFAULT_TIME_FORMAT
        } else {
            &self.time_format
        }
    }
}
