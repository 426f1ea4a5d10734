//! Process-wide logger used by the macros

use crate::{Error, Logger, NoOpLogger, Result};
use std::sync::{Arc, OnceLock};

static LOGGER: OnceLock<Arc<dyn Logger>> = OnceLock::new();
static NOOP: OnceLock<Arc<dyn Logger>> = OnceLock::new();

/// Install the process-wide logger
///
/// Only the first call succeeds; later calls return [`Error::AlreadyInitialized`].
pub fn init(logger: Arc<dyn Logger>) -> Result<()> {
    LOGGER.set(logger).map_err(|_| Error::AlreadyInitialized)
}

/// The process-wide logger, or a [`NoOpLogger`] before [`init`]
pub fn logger() -> Arc<dyn Logger> {
    match LOGGER.get() {
        Some(logger) => logger.clone(),
        None => NOOP.get_or_init(|| Arc::new(NoOpLogger)).clone(),
    }
}
