//! Structured logging primitives for huelog
//!
//! This crate holds the pieces every huelog backend shares:
//! - [`Level`], [`Value`], [`Attr`] and [`Record`], the data model of one log event
//! - the [`Logger`] trait backends implement, plus [`LoggerExt`] helpers
//! - [`Scope`], the generic accumulation of pre-bound attributes and groups
//! - a process-wide logger with the [`log!`], [`error!`], [`warn!`], [`info!`] and
//!   [`debug!`] macros
//! - optional bridges from the `log` and `tracing` ecosystems (`compat`)
//!
//! Rendering lives in backends such as `huelog-console`.

#![warn(missing_docs, unreachable_pub)]
#![forbid(unsafe_code)]

mod attr;
mod error;
mod global;
mod level;
mod logger;
mod macros;
mod record;
mod scope;

pub mod compat;

#[cfg(feature = "test-support")]
pub mod test_support;

pub use attr::{Attr, Value, format_duration};
pub use error::{Error, Result};
pub use global::{init, logger};
pub use level::Level;
pub use logger::{Logger, LoggerExt, NoOpLogger};
pub use record::Record;
pub use scope::Scope;
