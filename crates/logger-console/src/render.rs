//! Record-to-line rendering

use crate::config::{Field, RenderConfig};
use crate::style::Style;
use chrono::Local;
use huelog::{Attr, Record, Scope, Value};
use std::borrow::Cow;
use std::fmt::{self, Write};

/// Width of the level column for named levels
const LEVEL_WIDTH: usize = 6;
/// Width of the duration slot
const DURATION_WIDTH: usize = 12;
/// Width of the method slot
const METHOD_WIDTH: usize = 7;

/// Renders records against one configuration snapshot
///
/// Rendering never fails: every value has a display form, and bad configuration
/// degrades to defaults.
#[derive(Debug, Clone, Copy)]
pub struct Renderer<'c> {
    config: &'c RenderConfig,
    color: bool,
}

impl<'c> Renderer<'c> {
    /// Colorized renderer over `config`
    pub fn new(config: &'c RenderConfig) -> Self {
        Self {
            config,
            color: true,
        }
    }

    /// Enable or disable escape sequences regardless of the palette
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Render `record` with the scope's bound attributes as one `\n`-terminated line
    pub fn render(&self, record: &Record<'_>, scope: &Scope) -> String {
        let config = self.config;
        let palette = &config.palette;
        let mut slots: [Option<String>; Field::COUNT] = Default::default();
        let mut remaining: Vec<Cow<'_, Attr>> = Vec::new();

        if config.includes(Field::Level) {
            slots[Field::Level.index()] = Some(self.level(record));
        }
        if config.includes(Field::Time) {
            slots[Field::Time.index()] = Some(self.time(record));
        }
        if config.includes(Field::Source)
            && let Some(location) = record.location()
        {
            slots[Field::Source.index()] = Some(self.painted(&palette.source, location));
        }
        if config.includes(Field::Message) {
            slots[Field::Message.index()] = Some(self.painted(&palette.message, &record.message));
        }

        for attr in scope.resolve(record) {
            let Some(field) = config.slot_for(&attr.key) else {
                remaining.push(attr);
                continue;
            };
            let text = match field {
                Field::Status => self.status(&attr.value),
                Field::Duration => {
                    let text = format!("{:>DURATION_WIDTH$}", attr.value.to_string());
                    self.painted(&palette.duration, text)
                }
                Field::Method => {
                    let method = attr.value.to_string();
                    let text = format!("{method:>METHOD_WIDTH$}");
                    self.painted(palette.method(&method), text)
                }
                _ => self.painted(&palette.path, &attr.value),
            };
            slots[field.index()] = Some(text);
        }

        let mut line = String::with_capacity(128);
        for field in &config.field_order {
            if let Some(text) = &slots[field.index()] {
                line.push_str(text);
                line.push(' ');
            }
        }
        for attr in &remaining {
            self.paint(&mut line, &palette.attr_key, &attr.key);
            self.paint(&mut line, &palette.attr_delimiter, &config.delimiter);
            self.paint(&mut line, &palette.attr_value, &attr.value);
            line.push(' ');
        }
        line.push('\n');
        line
    }

    /// Named levels are padded and styled, custom ones are left as they are
    fn level(&self, record: &Record<'_>) -> String {
        match self.config.palette.level(record.level) {
            Some(style) => self.painted(style, format_args!("{:<LEVEL_WIDTH$}", record.level)),
            None => record.level.to_string(),
        }
    }

    fn time(&self, record: &Record<'_>) -> String {
        let mut text = String::new();
        let format = self.config.effective_time_format();
        if self.write_time(&mut text, record, format).is_err() {
            // Invalid strftime pattern
            text.clear();
            let _ = self.write_time(&mut text, record, RenderConfig::DEFAULT_TIME_FORMAT);
        }
        self.painted(&self.config.palette.time, text)
    }

    fn write_time(&self, buf: &mut String, record: &Record<'_>, format: &str) -> fmt::Result {
        if self.config.local_time {
            write!(buf, "{}", record.timestamp.with_timezone(&Local).format(format))
        } else {
            write!(buf, "{}", record.timestamp.format(format))
        }
    }

    /// Integer codes are styled by class, anything else is left as it is
    fn status(&self, value: &Value) -> String {
        match value.as_i128() {
            Some(code) => self.painted(self.config.palette.status(code), value),
            None => value.to_string(),
        }
    }

    fn painted(&self, style: &Style, text: impl fmt::Display) -> String {
        let mut out = String::new();
        self.paint(&mut out, style, text);
        out
    }

    fn paint(&self, buf: &mut String, style: &Style, text: impl fmt::Display) {
        if self.color {
            style.paint_into(buf, text);
        } else {
            let _ = write!(buf, "{text}");
        }
    }
}
