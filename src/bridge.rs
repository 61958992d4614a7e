//! Bridge from the `log` crate facade into the active logger.
//!
//! Code written against `log::info!` and friends keeps working: the
//! bridge resolves the process-wide active logger per record, so it
//! follows `set`/`unset` swaps for the lifetime of the process.

use eyre::Context;
use log::{LevelFilter, Log, Metadata, Record};

use crate::{registry, Level};

struct LogBridge;

// The facade has no fatal level; trace folds into debug.
fn map_level(level: log::Level) -> Level {
    match level {
        log::Level::Error => Level::Error,
        log::Level::Warn => Level::Warn,
        log::Level::Info => Level::Info,
        log::Level::Debug | log::Level::Trace => Level::Debug,
    }
}

impl Log for LogBridge {
    fn enabled(&self, metadata: &Metadata) -> bool {
        registry::active()
            .map(|logger| logger.enabled(map_level(metadata.level())))
            .unwrap_or(false)
    }

    fn log(&self, record: &Record) {
        registry::dispatch(map_level(record.level()), *record.args());
    }

    fn flush(&self) {}
}

/// Registers the bridge with the `log` facade. The facade accepts one
/// logger per process, so this can succeed at most once; later calls
/// report the facade's registration error.
pub fn init_log_bridge() -> eyre::Result<()> {
    log::set_max_level(LevelFilter::Trace);
    log::set_boxed_logger(Box::new(LogBridge)).context("Failed registering boxed logger")?;

    Ok(())
}
