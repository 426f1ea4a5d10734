//! Single-line colorized console backend for huelog
//!
//! [`ConsoleLogger`] renders every record as one line: the level, the timestamp, the
//! well-known HTTP attributes (status, duration, method, path), the source location and
//! the message in a configurable order, followed by the remaining attributes as
//! `key=value` pairs.
//!
//! ```text
//! INFO   [12:00:01.042] 200         15ms     GET /health src/main.rs:42 served peer=10.0.0.7
//! ```
//!
//! Each slot is painted with a [`Style`] from the [`Palette`]; sinks that do not support
//! color get the same line without escape sequences.
//!
//! # Example
//! ```
//! use huelog::{Attr, Level, Logger, Record};
//! use huelog_console::{ConsoleLogger, MemorySink, RenderConfig};
//!
//! let sink = MemorySink::no_color();
//! let logger = ConsoleLogger::builder()
//!     .sink(sink.clone())
//!     .config(RenderConfig::default().with_time_format("Z").with_local_time(false))
//!     .build();
//!
//! logger
//!     .log(Record::new(Level::WARN, "slow").with_attr(Attr::int("status", 503)))
//!     .unwrap();
//! assert_eq!(sink.to_string_lossy(), "WARN   Z 503 slow \n");
//! ```

#![warn(missing_docs, unreachable_pub)]
#![forbid(unsafe_code)]

mod config;
mod logger;
mod render;
mod sink;
pub mod style;

pub use config::{Field, Keys, Palette, RenderConfig};
pub use logger::{ConsoleLogger, ConsoleLoggerBuilder, init};
pub use render::Renderer;
pub use sink::MemorySink;
pub use style::Style;
