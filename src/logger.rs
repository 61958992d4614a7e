use std::fmt;

use crate::{
    formatters::DefaultFormatter,
    hook,
    level::{Level, ParseLevelError},
    sinks::{FileSink, StderrSink},
    LogFormatter, Sink,
};

#[derive(Debug, Clone)]
pub struct Config {
    pub datetime_format: String,
    pub use_ansi: bool,
}

impl Config {
    pub fn new() -> Self {
        Self {
            datetime_format: "%Y-%m-%d %H:%M:%S".to_string(),
            use_ansi: false,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

/// A severity threshold plus an ordered list of sinks.
///
/// Once constructed a `Logger` is immutable; reconfiguration means
/// building a new one and installing it with [`crate::set`]. Records at
/// or above the threshold are rendered to one line and written to every
/// sink in construction order; a failed sink write never prevents the
/// remaining sinks from being attempted, and nothing is reported back to
/// the emitting call site.
pub struct Logger {
    threshold: Level,
    sinks: Vec<Box<dyn Sink>>,
    formatter: Box<dyn LogFormatter>,
}

impl Logger {
    /// Parses `level` (see [`Level`]'s `FromStr`) and takes ownership of
    /// `sinks` in write order. Performs no I/O; sinks arrive pre-opened.
    pub fn new(level: &str, sinks: Vec<Box<dyn Sink>>) -> Result<Self, ParseLevelError> {
        let threshold = level.parse()?;
        Ok(Self {
            threshold,
            sinks,
            formatter: Box::new(DefaultFormatter::new(Config::new())),
        })
    }

    pub fn threshold(&self) -> Level {
        self.threshold
    }

    pub(crate) fn enabled(&self, level: Level) -> bool {
        level >= self.threshold
    }

    /// Formatted emit. Suppressed records are dropped before the message
    /// is materialized.
    pub fn logf(&self, level: Level, args: fmt::Arguments<'_>) {
        if !self.enabled(level) {
            return;
        }
        self.dispatch(level, &args.to_string());
    }

    pub fn debugf(&self, args: fmt::Arguments<'_>) {
        self.logf(Level::Debug, args);
    }

    pub fn infof(&self, args: fmt::Arguments<'_>) {
        self.logf(Level::Info, args);
    }

    pub fn warnf(&self, args: fmt::Arguments<'_>) {
        self.logf(Level::Warn, args);
    }

    pub fn errorf(&self, args: fmt::Arguments<'_>) {
        self.logf(Level::Error, args);
    }

    pub fn fatalf(&self, args: fmt::Arguments<'_>) {
        self.logf(Level::Fatal, args);
    }

    /// Emits the error's textual representation at error severity.
    pub fn error(&self, err: &dyn std::error::Error) {
        if self.enabled(Level::Error) {
            self.dispatch(Level::Error, &err.to_string());
        }
    }

    /// Emits the error's textual representation at fatal severity.
    /// `Fatal` is the maximum level, so this is never filtered.
    pub fn fatal(&self, err: &dyn std::error::Error) {
        self.dispatch(Level::Fatal, &err.to_string());
    }

    fn dispatch(&self, level: Level, message: &str) {
        let mut line = self.formatter.format(level, message);
        line.push('\n');

        for sink in &self.sinks {
            let _ = sink.write(line.as_bytes());
        }

        // The hook runs only after every sink was attempted, so a fatal
        // line is never lost to the process exiting first. In tests the
        // handler returns and control flows back to the caller normally.
        if level == Level::Fatal {
            hook::invoke();
        }
    }
}

type SinkConstructor = Box<dyn FnOnce() -> eyre::Result<Box<dyn Sink>>>;

/// Assembles a [`Logger`] out of sink descriptions, deferring fallible
/// sink construction (file opens) to [`build`](Builder::build).
pub struct Builder {
    threshold: Level,
    constructors: Vec<SinkConstructor>,
    config: Config,
}

impl Builder {
    pub fn new() -> Self {
        Self {
            threshold: Level::Info,
            constructors: Vec::new(),
            config: Config::new(),
        }
    }

    pub fn with_level(self, threshold: Level) -> Self {
        Self { threshold, ..self }
    }

    pub fn with_level_str(self, level: &str) -> Result<Self, ParseLevelError> {
        let threshold = level.parse()?;
        Ok(Self { threshold, ..self })
    }

    pub fn with_file_sink(mut self, path: impl Into<String>) -> Self {
        let path: String = path.into();
        self.constructors.push(Box::new(move || {
            let sink = FileSink::new(path)?;
            Ok(Box::new(sink) as Box<dyn Sink>)
        }));
        self
    }

    pub fn with_stderr_sink(mut self) -> Self {
        self.constructors
            .push(Box::new(|| Ok(Box::new(StderrSink::new()) as Box<dyn Sink>)));
        self
    }

    pub fn with_sink(mut self, sink: Box<dyn Sink>) -> Self {
        self.constructors.push(Box::new(move || Ok(sink)));
        self
    }

    pub fn with_datetime_format(mut self, format: impl Into<String>) -> Self {
        self.config.datetime_format = format.into();
        self
    }

    pub fn with_ansi(mut self, use_ansi: bool) -> Self {
        self.config.use_ansi = use_ansi;
        self
    }

    pub fn build(self) -> eyre::Result<Logger> {
        let mut sinks = Vec::with_capacity(self.constructors.len());
        for constructor in self.constructors {
            sinks.push(constructor()?);
        }

        Ok(Logger {
            threshold: self.threshold,
            sinks,
            formatter: Box::new(DefaultFormatter::new(self.config)),
        })
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}
