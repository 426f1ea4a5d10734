//! One-call setup routing every ecosystem into a single logger

use super::{log_bridge, tracing_bridge};
use crate::{Logger, Result};
use std::sync::Arc;

/// Install `logger` as the process-wide logger and bridge `log` and `tracing` into it
///
/// # Example
/// ```no_run
/// use huelog::{NoOpLogger, compat::init_with_bridges};
/// use std::sync::Arc;
///
/// init_with_bridges(Arc::new(NoOpLogger)).expect("Failed to install bridges");
/// ```
pub fn init_with_bridges(logger: Arc<dyn Logger>) -> Result<()> {
    crate::init(logger.clone())?;
    log_bridge::init_log_bridge(logger.clone())?;
    tracing_bridge::init_tracing_bridge(logger)?;
    Ok(())
}
