//! Log severity levels

use crate::Error;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Severity of a record
///
/// Levels are plain integers so backends and bridges can express severities between
/// the named ones. The named levels are spaced four apart; anything else displays as
/// the nearest lower named level plus a signed offset (`WARN+1`, `DEBUG-4`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Level(i32);

impl Level {
    /// Debug level
    pub const DEBUG: Self = Self(-4);
    /// Info level
    pub const INFO: Self = Self(0);
    /// Warning level
    pub const WARN: Self = Self(4);
    /// Error level
    pub const ERROR: Self = Self(8);

    /// Create a level from a raw severity
    #[inline]
    pub const fn new(severity: i32) -> Self {
        Self(severity)
    }

    /// Raw severity value
    #[inline]
    pub const fn severity(self) -> i32 {
        self.0
    }

    /// Level `delta` steps above (or below, when negative) this one
    #[inline]
    #[must_use]
    pub const fn offset(self, delta: i32) -> Self {
        Self(self.0.saturating_add(delta))
    }

    /// Whether this is one of the four named levels
    #[inline]
    pub const fn is_named(self) -> bool {
        matches!(self.0, -4 | 0 | 4 | 8)
    }

    /// Named level this one is displayed relative to
    const fn base(self) -> (&'static str, Self) {
        if self.0 < Self::INFO.0 {
            ("DEBUG", Self::DEBUG)
        } else if self.0 < Self::WARN.0 {
            ("INFO", Self::INFO)
        } else if self.0 < Self::ERROR.0 {
            ("WARN", Self::WARN)
        } else {
            ("ERROR", Self::ERROR)
        }
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::INFO
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (name, base) = self.base();
        let delta = self.0 - base.0;
        if delta == 0 {
            f.pad(name)
        } else {
            f.pad(&format!("{name}{delta:+}"))
        }
    }
}

impl FromStr for Level {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidLevel(s.to_string());
        let split = s.find(['+', '-']).unwrap_or(s.len());
        let (name, offset) = s.split_at(split);

        let base = match name.to_ascii_uppercase().as_str() {
            "DEBUG" => Self::DEBUG,
            "INFO" => Self::INFO,
            "WARN" => Self::WARN,
            "ERROR" => Self::ERROR,
            _ => return Err(invalid()),
        };

        if offset.is_empty() {
            return Ok(base);
        }
        let delta: i32 = offset.parse().map_err(|_| invalid())?;
        Ok(base.offset(delta))
    }
}

impl Serialize for Level {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Level {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
