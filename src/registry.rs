//! Process-wide active logger.
//!
//! A single slot holds "the current logger". [`set`] atomically replaces
//! it, [`unset`] clears it, and the free-standing emit macros and
//! functions forward to whatever is installed. While nothing is
//! installed every emit is a silent no-op; this module never panics on
//! behalf of the program it instruments.

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use crate::{Level, Logger};

static ACTIVE: RwLock<Option<Arc<Logger>>> = RwLock::new(None);

/// Installs `logger` as the process-wide active logger, replacing any
/// previously installed one. Safe to call concurrently with emits and
/// with itself; the last call wins.
pub fn set(logger: Logger) {
    let mut slot = ACTIVE.write().unwrap_or_else(PoisonError::into_inner);
    *slot = Some(Arc::new(logger));
}

/// Clears the active logger. Subsequent emits are no-ops until the next
/// [`set`].
pub fn unset() {
    let mut slot = ACTIVE.write().unwrap_or_else(PoisonError::into_inner);
    *slot = None;
}

// Clone the Arc out and emit outside the lock, so a slow sink never
// blocks set/unset and a concurrent swap never tears a record.
pub(crate) fn active() -> Option<Arc<Logger>> {
    ACTIVE
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Forwards one formatted record to the active logger. The per-severity
/// macros expand to this; it is not meant to be called directly.
#[doc(hidden)]
pub fn dispatch(level: Level, args: fmt::Arguments<'_>) {
    if let Some(logger) = active() {
        logger.logf(level, args);
    }
}

/// Emits `err`'s textual representation at error severity through the
/// active logger.
pub fn error(err: &dyn std::error::Error) {
    if let Some(logger) = active() {
        logger.error(err);
    }
}

/// Emits `err`'s textual representation at fatal severity through the
/// active logger, then invokes the termination hook. No logger, no
/// write, no hook.
pub fn fatal(err: &dyn std::error::Error) {
    if let Some(logger) = active() {
        logger.fatal(err);
    }
}
