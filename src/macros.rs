//! Per-severity, printf-style emit macros.
//!
//! Each expands to a dispatch through the process-wide active logger;
//! with no logger installed they are no-ops. Formatting follows
//! [`std::format_args!`], so anything `format!` accepts works here.

/// Emits a debug-severity record through the active logger.
#[macro_export]
macro_rules! debugf {
    ($($arg:tt)*) => {
        $crate::dispatch($crate::Level::Debug, format_args!($($arg)*))
    };
}

/// Emits an info-severity record through the active logger.
#[macro_export]
macro_rules! infof {
    ($($arg:tt)*) => {
        $crate::dispatch($crate::Level::Info, format_args!($($arg)*))
    };
}

/// Emits a warn-severity record through the active logger.
#[macro_export]
macro_rules! warnf {
    ($($arg:tt)*) => {
        $crate::dispatch($crate::Level::Warn, format_args!($($arg)*))
    };
}

/// Emits an error-severity record through the active logger.
#[macro_export]
macro_rules! errorf {
    ($($arg:tt)*) => {
        $crate::dispatch($crate::Level::Error, format_args!($($arg)*))
    };
}

/// Emits a fatal-severity record through the active logger, then invokes
/// the termination hook (which by default exits the process).
#[macro_export]
macro_rules! fatalf {
    ($($arg:tt)*) => {
        $crate::dispatch($crate::Level::Fatal, format_args!($($arg)*))
    };
}
