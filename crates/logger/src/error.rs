//! Error types for huelog

use std::io;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced to log call sites
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The sink rejected the rendered line
    #[error("failed to write log line: {0}")]
    Write(#[from] io::Error),

    /// A process-wide logger was already installed
    #[error("global logger already initialized")]
    AlreadyInitialized,

    /// Text that does not name a level
    #[error("invalid level: {0:?}")]
    InvalidLevel(String),

    /// A compatibility bridge could not be installed
    #[error("failed to install bridge: {0}")]
    Bridge(String),
}
