//! Leveled logging with multi-sink fan-out and a swappable process-wide
//! logger.
//!
//! A [`Logger`] holds a severity threshold and an ordered list of byte
//! sinks. Records at or above the threshold are rendered to a single
//! tagged line and written to every sink in order. Installing a logger
//! with [`set`] makes it the target of the free-standing emit macros
//! ([`debugf!`], [`infof!`], [`warnf!`], [`errorf!`], [`fatalf!`]) and the
//! error-valued [`error`]/[`fatal`] functions; [`unset`] returns the
//! process to the silent no-op state.
//!
//! Fatal-severity records additionally invoke the process-wide termination
//! hook after they have been written to all sinks. The hook defaults to
//! exiting the process and can be swapped out with [`set_exit_handler`]
//! to make the fatal path observable in tests.

mod bridge;
mod formatters;
mod hook;
mod level;
mod logger;
mod macros;
mod registry;
mod sinks;

pub use bridge::init_log_bridge;
pub use formatters::DefaultFormatter;
pub use hook::{reset_exit_handler, set_exit_handler};
pub use level::{Level, ParseLevelError};
pub use logger::{Builder, Config, Logger};
pub use registry::{error, fatal, set, unset};
pub use sinks::{FileSink, MemorySink, NullSink, StderrSink};

#[doc(hidden)]
pub use registry::dispatch;

/// A log destination: anything that accepts a byte sequence.
///
/// Implementations must serialize their own writes; the [`Logger`] calls
/// `write` concurrently from any thread that emits. A failed write is
/// attempted once and never retried.
pub trait Sink: Send + Sync {
    fn write(&self, buf: &[u8]) -> eyre::Result<usize>;
    fn close(&self) -> eyre::Result<()>;
}

/// Renders one log record into the line that gets handed to every sink.
pub trait LogFormatter: Send + Sync {
    fn format(&self, level: Level, message: &str) -> String;
}
